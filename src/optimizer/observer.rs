//! Diagnostics hooks fired during construction and minimization.

use log::{debug, info, log_enabled, Level};

use crate::enumeration::RouteSet;
use crate::models::{CityMap, Leg, Route, ScoredRoute};

/// Receives progress events from a [`RouteOptimizer`](super::RouteOptimizer).
///
/// All methods default to doing nothing.
pub trait TourObserver {
    /// A leg distance was computed.
    fn on_leg(&mut self, _cities: &CityMap, _leg: Leg, _distance: f64) {}

    /// The full route set was generated.
    fn on_routes(&mut self, _cities: &CityMap, _routes: &RouteSet) {}

    /// A route was scored during minimization.
    fn on_route_scored(&mut self, _cities: &CityMap, _scored: &ScoredRoute) {}

    /// Minimization finished with this route.
    fn on_best(&mut self, _cities: &CityMap, _best: &ScoredRoute) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TourObserver for NoopObserver {}

/// Observer that writes events to the `log` facade.
///
/// Per-leg, per-route and route-set events go to `debug`; the best route
/// goes to `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl TourObserver for LogObserver {
    fn on_leg(&mut self, cities: &CityMap, leg: Leg, distance: f64) {
        debug!(
            "The flight {}-{} has distance {} km.",
            cities.name(leg.from),
            cities.name(leg.to),
            distance
        );
    }

    fn on_routes(&mut self, cities: &CityMap, routes: &RouteSet) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        debug!(
            "{} routes exist: [{}].",
            routes.len(),
            routes
                .iter()
                .map(|r| format!("({})", r.describe(cities)))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    fn on_route_scored(&mut self, cities: &CityMap, scored: &ScoredRoute) {
        debug!(
            "Route: {}; Distance: {} km.",
            scored.route().describe(cities),
            scored.total()
        );
    }

    fn on_best(&mut self, cities: &CityMap, best: &ScoredRoute) {
        info!(
            "Best route is {} with total distance {} km.",
            best.route().describe(cities),
            best.total()
        );
        info!(
            "Partial distances on this route are: {} km.",
            format_partials(best.partials())
        );
    }
}

/// Renders partial distances as a comma-separated list.
pub fn format_partials(partials: &[f64]) -> String {
    partials
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Records every event it receives; useful when asserting on diagnostics.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    /// Legs in the order their distances were computed.
    pub legs: Vec<(Leg, f64)>,
    /// Size of each route set reported.
    pub route_sets: Vec<usize>,
    /// Routes in the order they were scored.
    pub scored: Vec<ScoredRoute>,
    /// Best routes reported.
    pub best: Vec<ScoredRoute>,
}

impl TourObserver for RecordingObserver {
    fn on_leg(&mut self, _cities: &CityMap, leg: Leg, distance: f64) {
        self.legs.push((leg, distance));
    }

    fn on_routes(&mut self, _cities: &CityMap, routes: &RouteSet) {
        self.route_sets.push(routes.len());
    }

    fn on_route_scored(&mut self, _cities: &CityMap, scored: &ScoredRoute) {
        self.scored.push(scored.clone());
    }

    fn on_best(&mut self, _cities: &CityMap, best: &ScoredRoute) {
        self.best.push(best.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_partials() {
        assert_eq!(format_partials(&[314.8, 629.4]), "314.8, 629.4");
        assert_eq!(format_partials(&[]), "");
    }

    #[test]
    fn test_noop_accepts_events() {
        let cities = CityMap::from_coordinates([("A", 0.0, 1.0), ("B", 2.0, 3.0)]).expect("valid");
        let route = Route::closed(cities.anchor(), &[crate::models::CityId(1)]);
        let scored = ScoredRoute::new(route, 1.0, vec![0.5, 0.5]);
        let mut obs = NoopObserver;
        obs.on_best(&cities, &scored);
        let mut log_obs = LogObserver;
        log_obs.on_best(&cities, &scored);
    }
}
