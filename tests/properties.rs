//! Property tests for distances, enumeration and minimization.

use exact_tsp::distance::great_circle_distance;
use exact_tsp::enumeration::RouteSet;
use exact_tsp::models::{CityMap, GeoPoint, Precision};
use exact_tsp::optimizer::{NoopObserver, RouteOptimizer};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = GeoPoint> {
    (-90.0f64..=90.0, -180.0f64..=180.0)
        .prop_map(|(lat, lon)| GeoPoint::new(lat, lon).expect("in range"))
}

fn precision() -> impl Strategy<Value = Precision> {
    prop_oneof![
        (0u32..=6).prop_map(Precision::RoundTo),
        Just(Precision::NoRounding),
    ]
}

fn city_map(max: usize) -> impl Strategy<Value = CityMap> {
    prop::collection::vec(point(), 2..=max).prop_map(|points| {
        CityMap::from_coordinates(
            points
                .into_iter()
                .enumerate()
                .map(|(i, p)| (format!("city-{i}"), p.latitude(), p.longitude())),
        )
        .expect("valid")
    })
}

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

proptest! {
    #[test]
    fn identical_points_are_zero_apart(p in point(), prec in precision()) {
        prop_assert_eq!(great_circle_distance(p, p, prec), 0.0);
    }

    #[test]
    fn distance_is_symmetric_up_to_rounding(a in point(), b in point(), digits in 0u32..=6) {
        let prec = Precision::RoundTo(digits);
        let ab = great_circle_distance(a, b, prec);
        let ba = great_circle_distance(b, a, prec);
        let unit = 10f64.powi(-(digits as i32));
        prop_assert!((ab - ba).abs() <= unit + 1e-9);
    }

    #[test]
    fn distance_is_bounded_by_half_circumference(a in point(), b in point()) {
        let d = great_circle_distance(a, b, Precision::NoRounding);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * 6378.0 + 1e-6);
    }

    #[test]
    fn route_set_covers_every_tour(cities in city_map(6)) {
        let routes = RouteSet::anchored(&cities);
        let n = cities.len();
        prop_assert_eq!(routes.len(), factorial(n - 1));
        for route in &routes {
            let stops = route.stops();
            prop_assert_eq!(stops.len(), n + 1);
            prop_assert_eq!(stops[0], cities.anchor());
            prop_assert_eq!(stops[n], cities.anchor());
            let mut interior: Vec<usize> = stops[1..n].iter().map(|c| c.index()).collect();
            interior.sort_unstable();
            prop_assert_eq!(interior, (1..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn minimize_is_exhaustive_and_stable(cities in city_map(6), prec in precision()) {
        let opt = RouteOptimizer::with_observer(cities, prec, &mut NoopObserver).expect("valid");
        let best = opt.minimize_with(&mut NoopObserver).expect("has routes");

        let mut first_min: Option<(usize, f64)> = None;
        for (i, route) in opt.routes().iter().enumerate() {
            let total = opt.score_route(route).expect("known legs").total();
            prop_assert!(best.total() <= total);
            if first_min.map_or(true, |(_, m)| total < m) {
                first_min = Some((i, total));
            }
        }
        let (index, _) = first_min.expect("non-empty");
        prop_assert_eq!(best.route(), &opt.routes().routes()[index]);

        let again = opt.minimize_with(&mut NoopObserver).expect("has routes");
        prop_assert_eq!(best, again);
    }

    #[test]
    fn table_has_every_ordered_pair(cities in city_map(7), prec in precision()) {
        let opt = RouteOptimizer::with_observer(cities, prec, &mut NoopObserver).expect("valid");
        let n = opt.cities().len();
        prop_assert_eq!(opt.distances().len(), n * (n - 1));
    }
}
