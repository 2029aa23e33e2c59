//! Leg, route and scored route types.

use serde::Serialize;

use super::{CityId, CityMap};

/// One directed edge of a tour.
///
/// Identity is the ordered pair of city ids, so `A -> B` and `B -> A` are
/// different legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Leg {
    /// Starting city.
    pub from: CityId,
    /// Destination city.
    pub to: CityId,
}

impl Leg {
    /// Creates a leg between two cities.
    pub fn new(from: CityId, to: CityId) -> Self {
        Self { from, to }
    }

    /// The same leg travelled the other way.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// A closed tour: the anchor city, every other city once, then the anchor
/// again.
///
/// # Examples
///
/// ```
/// use exact_tsp::models::{CityId, Route};
///
/// let route = Route::closed(CityId(0), &[CityId(2), CityId(1)]);
/// assert_eq!(route.len(), 4);
/// assert_eq!(route.legs().count(), 3);
/// assert_eq!(route.stops().first(), route.stops().last());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    stops: Vec<CityId>,
}

impl Route {
    /// Builds a closed route starting and ending at `anchor`.
    pub fn closed(anchor: CityId, interior: &[CityId]) -> Self {
        let mut stops = Vec::with_capacity(interior.len() + 2);
        stops.push(anchor);
        stops.extend_from_slice(interior);
        stops.push(anchor);
        Self { stops }
    }

    /// Wraps an explicit stop sequence without checking it.
    pub fn from_stops(stops: Vec<CityId>) -> Self {
        Self { stops }
    }

    /// The full stop sequence, anchor first and last.
    pub fn stops(&self) -> &[CityId] {
        &self.stops
    }

    /// Number of stops (N + 1 for a tour over N cities).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Consecutive legs in travel order.
    pub fn legs(&self) -> impl Iterator<Item = Leg> + '_ {
        self.stops.windows(2).map(|w| Leg::new(w[0], w[1]))
    }

    /// City names in travel order.
    pub fn names<'a>(&self, cities: &'a CityMap) -> Vec<&'a str> {
        self.stops.iter().map(|&id| cities.name(id)).collect()
    }

    /// Renders the route as `A - B - C - A`.
    pub fn describe(&self, cities: &CityMap) -> String {
        self.names(cities).join(" - ")
    }
}

/// A route together with its total and per-leg distances.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRoute {
    route: Route,
    total: f64,
    partials: Vec<f64>,
}

impl ScoredRoute {
    /// Creates a scored route.
    pub fn new(route: Route, total: f64, partials: Vec<f64>) -> Self {
        Self {
            route,
            total,
            partials,
        }
    }

    /// The scored route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Total distance in kilometres, rounded.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Distance of each leg in travel order, rounded.
    pub fn partials(&self) -> &[f64] {
        &self.partials
    }

    /// Resolves city names for display or serialization.
    pub fn report(&self, cities: &CityMap) -> RouteReport {
        RouteReport {
            route: self
                .route
                .names(cities)
                .into_iter()
                .map(str::to_owned)
                .collect(),
            total_km: self.total,
            partials_km: self.partials.clone(),
        }
    }
}

/// Name-resolved view of a [`ScoredRoute`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    /// City names, anchor first and last.
    pub route: Vec<String>,
    /// Total distance in kilometres.
    pub total_km: f64,
    /// Per-leg distances in kilometres.
    pub partials_km: Vec<f64>,
}
