//! Exhaustive tour optimizer.

use crate::distance::DistanceTable;
use crate::enumeration::RouteSet;
use crate::error::{Error, Result};
use crate::models::{CityId, CityMap, Precision, Route, ScoredRoute};

use super::{LogObserver, TourObserver};

/// Brute-force solver for the closed tour of minimum total distance.
///
/// Construction computes the distance of every ordered city pair and
/// enumerates every route anchored at the first city. Both are read-only
/// afterwards; [`minimize`](Self::minimize) scores all routes against the
/// stored table and can be called any number of times with the same result.
///
/// The route count grows as `(n-1)!`, so this is only practical for about a
/// dozen cities.
///
/// # Examples
///
/// ```
/// use exact_tsp::models::{CityMap, Precision};
/// use exact_tsp::optimizer::RouteOptimizer;
///
/// let cities = CityMap::from_coordinates([("A", 0.0, 1.0), ("B", 2.0, 3.0)]).unwrap();
/// let optimizer = RouteOptimizer::new(cities, Precision::RoundTo(1)).unwrap();
/// let best = optimizer.minimize().unwrap();
/// assert_eq!(best.route().describe(optimizer.cities()), "A - B - A");
/// assert_eq!(best.total(), 629.6);
/// assert_eq!(best.partials(), &[314.8, 314.8]);
/// ```
#[derive(Debug, Clone)]
pub struct RouteOptimizer {
    cities: CityMap,
    precision: Precision,
    distances: DistanceTable,
    routes: RouteSet,
}

impl RouteOptimizer {
    /// Builds the distance table and route set, logging each computed leg.
    pub fn new(cities: CityMap, precision: Precision) -> Result<Self> {
        Self::with_observer(cities, precision, &mut LogObserver)
    }

    /// Builds the distance table and route set, reporting to `observer`.
    pub fn with_observer(
        cities: CityMap,
        precision: Precision,
        observer: &mut dyn TourObserver,
    ) -> Result<Self> {
        if cities.len() < CityMap::MIN_CITIES {
            return Err(Error::configuration(format!(
                "at least {} cities are required, got {}",
                CityMap::MIN_CITIES,
                cities.len()
            )));
        }
        let distances = DistanceTable::from_cities_with(&cities, precision, |leg, d| {
            observer.on_leg(&cities, leg, d)
        });
        let routes = RouteSet::anchored(&cities);
        observer.on_routes(&cities, &routes);
        Ok(Self::from_parts(cities, precision, distances, routes))
    }

    pub(crate) fn from_parts(
        cities: CityMap,
        precision: Precision,
        distances: DistanceTable,
        routes: RouteSet,
    ) -> Self {
        Self {
            cities,
            precision,
            distances,
            routes,
        }
    }

    /// The cities being toured.
    pub fn cities(&self) -> &CityMap {
        &self.cities
    }

    /// The rounding policy applied to legs and totals.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Distance of every ordered city pair.
    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Every candidate route in enumeration order.
    pub fn routes(&self) -> &RouteSet {
        &self.routes
    }

    /// Scores a route using the stored distance table.
    ///
    /// Leg distances are already rounded; their sum is rounded again.
    /// Fails if the route uses a leg the table does not hold.
    pub fn score_route(&self, route: &Route) -> Result<ScoredRoute> {
        let partials = route
            .legs()
            .map(|leg| {
                self.distances.get(leg).ok_or_else(|| {
                    Error::missing_leg(self.label(leg.from), self.label(leg.to))
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        let total = self.precision.apply(partials.iter().sum());
        Ok(ScoredRoute::new(route.clone(), total, partials))
    }

    /// Finds the route with the smallest total distance, logging the result.
    pub fn minimize(&self) -> Result<ScoredRoute> {
        self.minimize_with(&mut LogObserver)
    }

    /// Finds the route with the smallest total distance, reporting to
    /// `observer`.
    ///
    /// On ties the earliest route in enumeration order wins.
    pub fn minimize_with(&self, observer: &mut dyn TourObserver) -> Result<ScoredRoute> {
        let mut best: Option<ScoredRoute> = None;
        for route in &self.routes {
            let scored = self.score_route(route)?;
            observer.on_route_scored(&self.cities, &scored);
            let improves = best
                .as_ref()
                .map_or(true, |b| scored.total() < b.total());
            if improves {
                best = Some(scored);
            }
        }
        let best = best.ok_or(Error::EmptyRoutes)?;
        observer.on_best(&self.cities, &best);
        Ok(best)
    }

    fn label(&self, id: CityId) -> String {
        self.cities
            .get(id)
            .map(|c| c.name().to_owned())
            .unwrap_or_else(|| id.to_string())
    }
}
