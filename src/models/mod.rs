//! Domain model types for tour optimization.
//!
//! Provides geographic points, the ordered city map, the rounding policy,
//! and the leg/route types that the optimizer enumerates and scores.

mod city;
mod point;
mod precision;
mod route;

pub use city::{City, CityId, CityMap};
pub use point::GeoPoint;
pub use precision::{Precision, DEFAULT_DECIMALS};
pub use route::{Leg, Route, RouteReport, ScoredRoute};
