//! Phase 3 tests: Itinerary Engine: time, cost, path checks, shortest path.

use std::path::Path;

use metro_graph::engine::{FlightModel, ItineraryEngine};
use metro_graph::format::DatasetReader;
use metro_graph::graph::{GraphBuilder, RouteGraph};
use metro_graph::types::{ErrorKind, Leg, MetroError};

// ==================== Helper ====================

fn load() -> RouteGraph {
    DatasetReader::read_from_file(Path::new("tests/data/test_data.json")).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// A-B-C-D chain of 1000-unit routes, plus a spur from B to E.
fn chain() -> RouteGraph {
    GraphBuilder::new()
        .add_city("AAA", "A", "X", 1)
        .add_city("BBB", "B", "X", 1)
        .add_city("CCC", "C", "X", 1)
        .add_city("DDD", "D", "X", 1)
        .add_city("EEE", "E", "X", 1)
        .link("AAA", "BBB", 1000)
        .link("BBB", "CCC", 1000)
        .link("CCC", "DDD", 1000)
        .link("BBB", "EEE", 300)
        .build()
        .unwrap()
}

// ==================== Time ====================

#[test]
fn test_flight_hours_reference_values() {
    let model = FlightModel::default();
    assert!(approx(model.flight_hours(100.0), 200.0 / 750.0));
    assert!(approx(model.flight_hours(5000.0), 7.2));
}

#[test]
fn test_first_leg_has_no_layover() {
    let graph = chain();
    let engine = ItineraryEngine::new();
    let leg = Leg::new("BBB", "CCC");

    let plain = engine.leg_time(&graph, &leg, false).unwrap();
    let connecting = engine.leg_time(&graph, &leg, true).unwrap();
    assert!(approx(plain, 800.0 / 750.0 + 600.0 / 750.0));
    // BBB has 3 distinct neighbors: 2 - (3 - 1) / 6
    assert!(approx(connecting - plain, 2.0 - 2.0 / 6.0));

    let total = engine.itinerary_time(&graph, &[leg]).unwrap();
    assert!(approx(total, plain));
}

#[test]
fn test_itinerary_time_sums_layovers() {
    let graph = chain();
    let engine = ItineraryEngine::new();
    let legs = Leg::chain(&["AAA", "BBB", "CCC", "DDD"]).unwrap();

    let flight = 800.0 / 750.0 + 600.0 / 750.0;
    let layover_b = 2.0 - 2.0 / 6.0;
    let layover_c = 2.0 - 1.0 / 6.0;
    let expected = 3.0 * flight + layover_b + layover_c;
    assert!(approx(engine.itinerary_time(&graph, &legs).unwrap(), expected));
}

#[test]
fn test_short_leg_never_reaches_cruise() {
    let graph = chain();
    let hours = ItineraryEngine::new()
        .leg_time(&graph, &Leg::new("EEE", "BBB"), false)
        .unwrap();
    assert!(approx(hours, 600.0 / 750.0));
}

#[test]
fn test_custom_model() {
    let graph = chain();
    let model = FlightModel {
        cruise_speed: 500.0,
        ..FlightModel::default()
    };
    let engine = ItineraryEngine::with_model(model);
    assert_eq!(engine.model(), &model);
    assert_eq!(ItineraryEngine::new().model(), &FlightModel::default());
    let hours = engine.leg_time(&graph, &Leg::new("AAA", "BBB"), false).unwrap();
    assert!(approx(hours, 800.0 / 500.0 + 600.0 / 500.0));
}

// ==================== Cost ====================

#[test]
fn test_three_leg_cost() {
    let graph = chain();
    let legs = Leg::chain(&["AAA", "BBB", "CCC", "DDD"]).unwrap();
    let cost = ItineraryEngine::new().itinerary_cost(&graph, &legs).unwrap();
    assert!((cost - 900.0).abs() < 1e-6);
}

#[test]
fn test_rate_floor_keeps_long_itineraries_non_negative() {
    let graph = chain();
    let mut codes = Vec::new();
    for _ in 0..6 {
        codes.push("AAA");
        codes.push("BBB");
    }
    let legs = Leg::chain(&codes).unwrap();
    assert_eq!(legs.len(), 11);

    let cost = ItineraryEngine::new().itinerary_cost(&graph, &legs).unwrap();
    // 0.35 + 0.30 + ... + 0.05 then zero for the remaining legs.
    assert!((cost - 1000.0 * 1.4).abs() < 1e-6);
}

#[test]
fn test_itinerary_distance() {
    let graph = load();
    let legs = Leg::chain(&["JFK", "LON", "MAD"]).unwrap();
    let distance = ItineraryEngine::new()
        .itinerary_distance(&graph, &legs)
        .unwrap();
    assert_eq!(distance, 4786);
}

#[test]
fn test_itinerary_distance_overflow_is_rejected() {
    let graph = GraphBuilder::new()
        .add_city("AAA", "A", "X", 1)
        .add_city("BBB", "B", "X", 1)
        .add_city("CCC", "C", "X", 1)
        .link("AAA", "BBB", u64::MAX)
        .link("BBB", "CCC", 1)
        .build()
        .unwrap();
    let engine = ItineraryEngine::new();

    let one_leg = Leg::chain(&["BBB", "AAA"]).unwrap();
    assert_eq!(engine.itinerary_distance(&graph, &one_leg).unwrap(), u64::MAX);

    let legs = Leg::chain(&["AAA", "BBB", "CCC"]).unwrap();
    let err = engine.itinerary_distance(&graph, &legs).unwrap_err();
    assert!(matches!(err, MetroError::InvalidItinerary(_)));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        engine.plan(&graph, legs).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

// ==================== Path Checks ====================

#[test]
fn test_check_path_names_missing_leg() {
    let graph = load();
    let legs = Leg::chain(&["JFK", "LON", "LIM", "BOG"]).unwrap();
    let err = ItineraryEngine::new().check_path(&graph, &legs).unwrap_err();
    match err {
        MetroError::NoRoute { from, to } => {
            assert_eq!(from, "LON");
            assert_eq!(to, "LIM");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_plan_reports_everything() {
    let graph = load();
    let legs = Leg::chain(&["JFK", "LON", "MAD"]).unwrap();
    let engine = ItineraryEngine::new();
    let report = engine.plan(&graph, legs.clone()).unwrap();

    assert_eq!(report.legs, legs);
    assert_eq!(report.distance, 4786);
    assert!(approx(report.cost, 3000.0 * 0.35 + 1786.0 * 0.30));
    assert!(approx(
        report.hours,
        engine.itinerary_time(&graph, &legs).unwrap()
    ));
}

#[test]
fn test_plan_rejects_gap() {
    let graph = load();
    let legs = Leg::chain(&["LGA", "JFK"]).unwrap();
    let err = ItineraryEngine::new().plan(&graph, legs).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoRoute);
}

// ==================== Shortest Path ====================

#[test]
fn test_shortest_prefers_cheaper_connection() {
    let graph = load();
    let path = ItineraryEngine::new()
        .shortest_path(&graph, "JFK", "MAD")
        .unwrap();
    // JFK-LON-MAD (4786) is shorter than the direct 5786 route.
    assert_eq!(path.distance, 4786);
    assert_eq!(
        path.legs,
        vec![Leg::new("JFK", "LON"), Leg::new("LON", "MAD")]
    );
    assert_eq!(path.to_string(), "JFK -> LON -> MAD");
    assert_eq!(path.stops(), vec!["JFK", "LON", "MAD"]);
}

#[test]
fn test_shortest_reports_time_and_cost() {
    let graph = load();
    let engine = ItineraryEngine::new();
    let path = engine.shortest_path(&graph, "MEX", "LIM").unwrap();

    assert_eq!(path.distance, 4500);
    assert_eq!(path.legs, vec![Leg::new("MEX", "LIM")]);
    assert!(approx(path.cost, 4500.0 * 0.35));
    assert!(approx(
        path.hours,
        engine.itinerary_time(&graph, &path.legs).unwrap()
    ));
}

#[test]
fn test_shortest_self_is_empty() {
    let graph = load();
    let path = ItineraryEngine::new()
        .shortest_path(&graph, "LGA", "LGA")
        .unwrap();
    assert_eq!(path.distance, 0);
    assert!(path.legs.is_empty());
    assert_eq!(path.hours, 0.0);
    assert_eq!(path.cost, 0.0);
}

#[test]
fn test_shortest_unreachable() {
    let graph = load();
    let err = ItineraryEngine::new()
        .shortest_path(&graph, "JFK", "LIM")
        .unwrap_err();
    assert!(matches!(err, MetroError::PathNotFound { .. }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_shortest_unknown_city() {
    let graph = load();
    let err = ItineraryEngine::new()
        .shortest_path(&graph, "JFK", "SFO")
        .unwrap_err();
    assert!(matches!(err, MetroError::CityNotFound(code) if code == "SFO"));
}

#[test]
fn test_shortest_uses_cheapest_parallel_route() {
    let graph = GraphBuilder::new()
        .add_city("AAA", "A", "X", 1)
        .add_city("BBB", "B", "X", 1)
        .link("AAA", "BBB", 900)
        .link("BBB", "AAA", 700)
        .build()
        .unwrap();
    let path = ItineraryEngine::new()
        .shortest_path(&graph, "AAA", "BBB")
        .unwrap();
    assert_eq!(path.distance, 700);
    assert!(approx(path.cost, 700.0 * 0.35));
}

#[test]
fn test_shortest_path_past_u64_is_unreachable() {
    let graph = GraphBuilder::new()
        .add_city("AAA", "A", "X", 1)
        .add_city("BBB", "B", "X", 1)
        .add_city("CCC", "C", "X", 1)
        .link("AAA", "BBB", u64::MAX)
        .link("BBB", "CCC", 1)
        .build()
        .unwrap();
    let engine = ItineraryEngine::new();

    let err = engine.shortest_path(&graph, "AAA", "CCC").unwrap_err();
    assert!(matches!(err, MetroError::PathNotFound { .. }));

    let path = engine.shortest_path(&graph, "AAA", "BBB").unwrap();
    assert_eq!(path.distance, u64::MAX);
}
