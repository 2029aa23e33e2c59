//! Cities and the ordered city map.

use std::collections::HashSet;
use std::fmt;

use super::GeoPoint;
use crate::error::{Error, Result};

/// Index of a city within its [`CityMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(pub usize);

impl CityId {
    /// Position of this city in the map.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named location.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    name: String,
    location: GeoPoint,
}

impl City {
    /// Creates a new city.
    pub fn new(name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    /// City name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// City coordinates.
    pub fn location(&self) -> GeoPoint {
        self.location
    }
}

/// The set of cities a tour must visit, in a fixed order.
///
/// Order is the order in which cities were supplied. The first city is the
/// anchor every enumerated route starts and ends at. A map always holds at
/// least two cities with unique names.
///
/// # Examples
///
/// ```
/// use exact_tsp::models::{City, CityMap, GeoPoint};
///
/// let cities = CityMap::new(vec![
///     City::new("A", GeoPoint::new(0.0, 1.0).unwrap()),
///     City::new("B", GeoPoint::new(2.0, 3.0).unwrap()),
/// ])
/// .unwrap();
/// assert_eq!(cities.len(), 2);
/// assert_eq!(cities.anchor().index(), 0);
/// assert_eq!(cities.name(cities.anchor()), "A");
/// ```
#[derive(Debug, Clone)]
pub struct CityMap {
    cities: Vec<City>,
}

impl CityMap {
    /// Minimum number of cities for a non-degenerate tour.
    pub const MIN_CITIES: usize = 2;

    /// Creates a city map.
    ///
    /// Fails with a configuration error if fewer than two cities are given
    /// or a name appears more than once.
    pub fn new(cities: Vec<City>) -> Result<Self> {
        if cities.len() < Self::MIN_CITIES {
            return Err(Error::configuration(format!(
                "at least {} cities are required, got {}",
                Self::MIN_CITIES,
                cities.len()
            )));
        }
        let mut seen = HashSet::with_capacity(cities.len());
        for city in &cities {
            if !seen.insert(city.name()) {
                return Err(Error::configuration(format!(
                    "duplicate city name '{}'",
                    city.name()
                )));
            }
        }
        Ok(Self { cities })
    }

    /// Builds a map from `(name, latitude, longitude)` triples.
    pub fn from_coordinates<S: Into<String>>(
        entries: impl IntoIterator<Item = (S, f64, f64)>,
    ) -> Result<Self> {
        let cities = entries
            .into_iter()
            .map(|(name, lat, lon)| -> Result<City> {
                let name: String = name.into();
                let point = GeoPoint::new(lat, lon).map_err(|e| match e {
                    Error::Configuration(msg) => {
                        Error::configuration(format!("city '{name}': {msg}"))
                    }
                    other => other,
                })?;
                Ok(City::new(name, point))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(cities)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false`; a valid map holds at least two cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// The fixed start and end city of every enumerated route.
    pub fn anchor(&self) -> CityId {
        CityId(0)
    }

    /// Returns the city with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this map.
    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id.0]
    }

    /// Returns the city with the given id, if it belongs to this map.
    pub fn get(&self, id: CityId) -> Option<&City> {
        self.cities.get(id.0)
    }

    /// Name of the city with the given id.
    pub fn name(&self, id: CityId) -> &str {
        self.city(id).name()
    }

    /// Looks up a city id by name.
    pub fn id_of(&self, name: &str) -> Option<CityId> {
        self.cities.iter().position(|c| c.name() == name).map(CityId)
    }

    /// All city ids in map order.
    pub fn ids(&self) -> impl Iterator<Item = CityId> + '_ {
        (0..self.cities.len()).map(CityId)
    }

    /// Iterates over `(id, city)` pairs in map order.
    pub fn iter(&self) -> impl Iterator<Item = (CityId, &City)> + '_ {
        self.cities.iter().enumerate().map(|(i, c)| (CityId(i), c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> CityMap {
        CityMap::from_coordinates([("A", 0.0, 1.0), ("B", 2.0, 3.0), ("C", 4.0, 5.0)])
            .expect("valid")
    }

    #[test]
    fn test_map_preserves_order() {
        let map = abc();
        let names: Vec<&str> = map.iter().map(|(_, c)| c.name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(map.name(map.anchor()), "A");
    }

    #[test]
    fn test_map_lookup() {
        let map = abc();
        assert_eq!(map.id_of("C"), Some(CityId(2)));
        assert_eq!(map.id_of("Z"), None);
        assert_eq!(map.city(CityId(1)).location().longitude(), 3.0);
        assert!(map.get(CityId(3)).is_none());
    }

    #[test]
    fn test_map_rejects_too_few() {
        let empty: Vec<(&str, f64, f64)> = vec![];
        assert!(matches!(
            CityMap::from_coordinates(empty),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            CityMap::from_coordinates([("A", 0.0, 0.0)]),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_map_two_cities_ok() {
        let map = CityMap::from_coordinates([("A", 0.0, 1.0), ("B", 2.0, 3.0)]).expect("valid");
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
    }

    #[test]
    fn test_map_rejects_duplicates() {
        let err = CityMap::from_coordinates([("A", 0.0, 1.0), ("A", 2.0, 3.0)])
            .expect_err("duplicate");
        assert!(err.to_string().contains("duplicate city name 'A'"));
    }

    #[test]
    fn test_map_reports_bad_city() {
        let err = CityMap::from_coordinates([("A", 0.0, 1.0), ("B", 95.0, 3.0)])
            .expect_err("out of range");
        assert!(err.to_string().contains("city 'B'"));
    }

    #[test]
    fn test_city_id_display() {
        assert_eq!(CityId(4).to_string(), "#4");
        assert_eq!(CityId(4).index(), 4);
    }
}
