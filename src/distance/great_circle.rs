//! Great-circle distance on a spherical Earth.
//!
//! # Algorithm
//!
//! Spherical law of cosines:
//!
//! ```text
//! alpha    = acos(cos(lat1) * cos(lat2) * cos(lon1 - lon2) + sin(lat1) * sin(lat2))
//! distance = alpha * R
//! ```
//!
//! The acos argument is clamped to `[-1, 1]`; rounding error can push it just
//! past the boundary for nearly identical or antipodal points.

use crate::models::{GeoPoint, Precision};

/// Sphere radius used for all distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6378.0;

/// Great-circle distance between two points in kilometres, rounded per
/// `precision`.
///
/// Identical points are exactly `0.0` apart.
///
/// # Examples
///
/// ```
/// use exact_tsp::models::{GeoPoint, Precision};
/// use exact_tsp::distance::great_circle_distance;
///
/// let a = GeoPoint::new(0.0, 1.0).unwrap();
/// let b = GeoPoint::new(2.0, 3.0).unwrap();
/// assert_eq!(great_circle_distance(a, b, Precision::RoundTo(1)), 314.8);
/// assert_eq!(great_circle_distance(a, a, Precision::NoRounding), 0.0);
/// ```
pub fn great_circle_distance(a: GeoPoint, b: GeoPoint, precision: Precision) -> f64 {
    if a == b {
        return 0.0;
    }
    precision.apply(central_angle(a, b) * EARTH_RADIUS_KM)
}

/// Central angle between two points in radians.
fn central_angle(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lon1) = (a.latitude_rad(), a.longitude_rad());
    let (lat2, lon2) = (b.latitude_rad(), b.longitude_rad());
    let cos_alpha = lat1.cos() * lat2.cos() * (lon1 - lon2).cos() + lat1.sin() * lat2.sin();
    cos_alpha.clamp(-1.0, 1.0).acos()
}
