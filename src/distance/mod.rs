//! Great-circle distances and the pairwise distance table.

mod great_circle;
mod table;

pub use great_circle::{great_circle_distance, EARTH_RADIUS_KM};
pub use table::DistanceTable;
