//! Exhaustive search for the shortest closed tour.
//!
//! - [`RouteOptimizer`] — builds the distance table and route set, then
//!   scores every route and keeps the minimum
//! - [`TourObserver`] — diagnostics hooks, with [`LogObserver`] writing to
//!   the `log` facade

mod observer;
mod route_optimizer;

pub use observer::{format_partials, LogObserver, NoopObserver, RecordingObserver, TourObserver};
pub use route_optimizer::RouteOptimizer;
