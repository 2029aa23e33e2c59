//! JSON city file loading.
//!
//! The expected layout is one object keyed by city name:
//!
//! ```text
//! {
//!     "Prague": { "latitude": 50.0755, "longitude": 14.4378 },
//!     "Vienna": { "latitude": 48.2082, "longitude": 16.3738 }
//! }
//! ```
//!
//! Key order is preserved, so the first city in the file is the anchor.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::models::CityMap;

#[derive(Debug, Deserialize)]
struct CityRecord {
    latitude: f64,
    longitude: f64,
}

/// Reads a city map from a JSON file.
pub fn load_cities(path: impl AsRef<Path>) -> Result<CityMap> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    parse_cities(&text)
}

/// Parses a city map from JSON text.
///
/// # Examples
///
/// ```
/// use exact_tsp::io::parse_cities;
///
/// let cities = parse_cities(r#"{
///     "B": {"latitude": 2, "longitude": 3},
///     "A": {"latitude": 0, "longitude": 1}
/// }"#).unwrap();
/// assert_eq!(cities.name(cities.anchor()), "B");
/// ```
pub fn parse_cities(text: &str) -> Result<CityMap> {
    let entries: Map<String, Value> = serde_json::from_str(text)?;
    let mut triples = Vec::with_capacity(entries.len());
    for (name, value) in entries {
        let record: CityRecord = serde_json::from_value(value)
            .map_err(|e| Error::configuration(format!("city '{name}': {e}")))?;
        triples.push((name, record.latitude, record.longitude));
    }
    CityMap::from_coordinates(triples)
}
