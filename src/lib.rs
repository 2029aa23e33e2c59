//! # exact-tsp
//!
//! Exact solver for the small-instance travelling salesman problem over
//! geographic coordinates. Every distinct closed tour is enumerated and
//! scored with great-circle distances; the shortest one wins.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (GeoPoint, CityMap, Precision, Leg, Route, ScoredRoute)
//! - [`distance`] — Great-circle distance and the pairwise distance table
//! - [`enumeration`] — Permutation iterator and the anchored route set
//! - [`optimizer`] — Exhaustive minimization and diagnostics hooks
//! - [`io`] — JSON city file loading
//!
//! ## Example
//!
//! ```
//! use exact_tsp::io::parse_cities;
//! use exact_tsp::models::Precision;
//! use exact_tsp::optimizer::RouteOptimizer;
//!
//! let cities = parse_cities(r#"{
//!     "A": {"latitude": 0, "longitude": 1},
//!     "B": {"latitude": 2, "longitude": 3},
//!     "C": {"latitude": 4, "longitude": 5}
//! }"#).unwrap();
//! let optimizer = RouteOptimizer::new(cities, Precision::RoundTo(1)).unwrap();
//! let best = optimizer.minimize().unwrap();
//! assert_eq!(best.total(), 1258.8);
//! ```

pub mod distance;
pub mod enumeration;
mod error;
pub mod io;
pub mod models;
pub mod optimizer;

pub use error::{Error, Result};
