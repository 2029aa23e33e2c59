//! Pairwise distance table.

use crate::models::{CityId, CityMap, Leg, Precision};

use super::great_circle_distance;

/// Dense n×n table of leg distances stored in row-major order.
///
/// Holds one entry per ordered pair of distinct cities, `n * (n - 1)` in
/// total. The diagonal is empty. Each direction is computed on its own, so
/// `A -> B` and `B -> A` may differ in the last rounded digit.
///
/// # Examples
///
/// ```
/// use exact_tsp::models::{CityId, CityMap, Leg, Precision};
/// use exact_tsp::distance::DistanceTable;
///
/// let cities = CityMap::from_coordinates([("A", 0.0, 1.0), ("B", 2.0, 3.0)]).unwrap();
/// let table = DistanceTable::from_cities(&cities, Precision::RoundTo(1));
/// assert_eq!(table.get(Leg::new(CityId(0), CityId(1))), Some(314.8));
/// assert_eq!(table.get(Leg::new(CityId(0), CityId(0))), None);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceTable {
    data: Vec<Option<f64>>,
    size: usize,
}

impl DistanceTable {
    /// Creates an empty table for `size` cities.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![None; size * size],
            size,
        }
    }

    /// Computes the distance of every ordered pair of distinct cities.
    pub fn from_cities(cities: &CityMap, precision: Precision) -> Self {
        Self::from_cities_with(cities, precision, |_, _| {})
    }

    /// Like [`from_cities`](Self::from_cities), calling `on_leg` after each
    /// distance is computed.
    pub fn from_cities_with<F>(cities: &CityMap, precision: Precision, mut on_leg: F) -> Self
    where
        F: FnMut(Leg, f64),
    {
        let mut table = Self::new(cities.len());
        for (from, a) in cities.iter() {
            for (to, b) in cities.iter() {
                if from == to {
                    continue;
                }
                let leg = Leg::new(from, to);
                let d = great_circle_distance(a.location(), b.location(), precision);
                table.set(leg, d);
                on_leg(leg, d);
            }
        }
        table
    }

    /// Returns the distance of `leg`, or `None` if it was never recorded.
    pub fn get(&self, leg: Leg) -> Option<f64> {
        self.index(leg).and_then(|i| self.data[i])
    }

    /// Records the distance of `leg`.
    ///
    /// # Panics
    ///
    /// Panics if either city is outside the table.
    pub fn set(&mut self, leg: Leg, distance: f64) {
        let i = self
            .index(leg)
            .unwrap_or_else(|| panic!("leg {} -> {} outside table", leg.from, leg.to));
        self.data[i] = Some(distance);
    }

    /// Number of cities this table covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of recorded legs.
    pub fn len(&self) -> usize {
        self.data.iter().filter(|d| d.is_some()).count()
    }

    /// Returns `true` if no leg is recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over recorded legs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Leg, f64)> + '_ {
        self.data.iter().enumerate().filter_map(move |(i, &d)| {
            d.map(|d| (Leg::new(CityId(i / self.size), CityId(i % self.size)), d))
        })
    }

    /// Returns `true` if both directions of every leg agree within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        self.iter().all(|(leg, d)| match self.get(leg.reversed()) {
            Some(back) => (d - back).abs() <= tol,
            None => false,
        })
    }

    fn index(&self, leg: Leg) -> Option<usize> {
        let (from, to) = (leg.from.index(), leg.to.index());
        (from < self.size && to < self.size).then(|| from * self.size + to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> CityMap {
        CityMap::from_coordinates([("A", 0.0, 1.0), ("B", 2.0, 3.0), ("C", 4.0, 5.0)])
            .expect("valid")
    }

    fn leg(from: usize, to: usize) -> Leg {
        Leg::new(CityId(from), CityId(to))
    }

    #[test]
    fn test_from_cities() {
        let table = DistanceTable::from_cities(&abc(), Precision::RoundTo(1));
        assert_eq!(table.size(), 3);
        assert_eq!(table.len(), 6);
        assert_eq!(table.get(leg(0, 1)), Some(314.8));
        assert_eq!(table.get(leg(1, 0)), Some(314.8));
        assert_eq!(table.get(leg(0, 2)), Some(629.4));
        assert_eq!(table.get(leg(2, 0)), Some(629.4));
        assert_eq!(table.get(leg(1, 2)), Some(314.6));
        assert_eq!(table.get(leg(2, 1)), Some(314.6));
    }

    #[test]
    fn test_diagonal_and_out_of_range_absent() {
        let table = DistanceTable::from_cities(&abc(), Precision::RoundTo(1));
        assert_eq!(table.get(leg(1, 1)), None);
        assert_eq!(table.get(leg(0, 7)), None);
    }

    #[test]
    fn test_callback_sees_every_leg() {
        let mut seen = Vec::new();
        let table = DistanceTable::from_cities_with(&abc(), Precision::RoundTo(1), |l, d| {
            seen.push((l, d))
        });
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[0], (leg(0, 1), 314.8));
        assert!(seen.iter().all(|&(l, d)| table.get(l) == Some(d)));
    }

    #[test]
    fn test_symmetric() {
        let table = DistanceTable::from_cities(&abc(), Precision::RoundTo(3));
        assert!(table.is_symmetric(0.001 + 1e-9));
    }

    #[test]
    fn test_asymmetric_table() {
        let mut table = DistanceTable::new(2);
        table.set(leg(0, 1), 10.0);
        table.set(leg(1, 0), 15.0);
        assert!(!table.is_symmetric(1e-10));
    }

    #[test]
    fn test_set_get() {
        let mut table = DistanceTable::new(3);
        assert!(table.is_empty());
        table.set(leg(0, 1), 42.0);
        assert_eq!(table.get(leg(0, 1)), Some(42.0));
        assert_eq!(table.get(leg(1, 0)), None);
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![(leg(0, 1), 42.0)]);
    }
}
