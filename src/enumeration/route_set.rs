//! Enumeration of every distinct closed tour.

use super::Permutations;
use crate::models::{CityId, CityMap, Route};

/// Every closed route over a city map, anchored at the map's first city.
///
/// Fixing the anchor removes rotations of the same cycle, leaving `(n-1)!`
/// routes. Reversed traversals of the same cycle are kept as separate
/// routes. Order is the lexicographic order of the interior positions, so
/// it is the same for every run over the same map.
///
/// # Examples
///
/// ```
/// use exact_tsp::models::CityMap;
/// use exact_tsp::enumeration::RouteSet;
///
/// let cities = CityMap::from_coordinates([
///     ("A", 0.0, 1.0),
///     ("B", 2.0, 3.0),
///     ("C", 4.0, 5.0),
/// ])
/// .unwrap();
/// let routes = RouteSet::anchored(&cities);
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes.routes()[0].describe(&cities), "A - B - C - A");
/// assert_eq!(routes.routes()[1].describe(&cities), "A - C - B - A");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteSet {
    routes: Vec<Route>,
}

impl RouteSet {
    /// Enumerates all routes starting and ending at `cities.anchor()`.
    pub fn anchored(cities: &CityMap) -> Self {
        Self::anchored_with(cities, |_| {})
    }

    /// Like [`anchored`](Self::anchored), calling `on_route` for each route
    /// as it is generated.
    pub fn anchored_with<F>(cities: &CityMap, mut on_route: F) -> Self
    where
        F: FnMut(&Route),
    {
        let anchor = cities.anchor();
        let interior: Vec<CityId> = cities.ids().filter(|&id| id != anchor).collect();
        let routes = Permutations::new(&interior)
            .map(|order| {
                let route = Route::closed(anchor, &order);
                on_route(&route);
                route
            })
            .collect();
        Self { routes }
    }

    /// Wraps an explicit list of routes.
    pub fn from_routes(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Routes in enumeration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if there are no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterates over routes in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }
}

impl<'a> IntoIterator for &'a RouteSet {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
