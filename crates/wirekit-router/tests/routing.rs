use wirekit_core::Point;
use wirekit_router::{
    simplify, CircuitRouter, DirectPlanner, ManhattanPlanner, PathPlanner, Topology, DEFAULT_WIRE,
};

#[test]
fn test_ids_are_sequential() {
    let targets: Vec<Point> = (1..=5).map(|i| Point::new(i as f64 * 10.0, 0.0)).collect();
    let circuits = CircuitRouter::new()
        .route(Point::new(0.0, 0.0), &targets, DEFAULT_WIRE)
        .unwrap();

    assert_eq!(circuits.len(), 5);
    for (i, ckt) in circuits.iter().enumerate() {
        assert_eq!(ckt.id, format!("ckt_{}", i + 1));
        assert_eq!(ckt.wire, "14/2");
    }
}

#[test]
fn test_chain_topology() {
    let targets = vec![
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(30.0, 10.0),
    ];
    let circuits = CircuitRouter::new()
        .route(Point::new(0.0, 0.0), &targets, DEFAULT_WIRE)
        .unwrap();

    // Each circuit starts where the previous one ended.
    for (i, ckt) in circuits.iter().enumerate() {
        let expected_source = if i == 0 {
            Point::new(0.0, 0.0)
        } else {
            targets[i - 1]
        };
        assert_eq!(ckt.source(), Some(&expected_source));
        assert_eq!(ckt.target(), Some(&targets[i]));
    }
}

#[test]
fn test_star_topology() {
    let panel = Point::new(5.0, 5.0);
    let targets = vec![Point::new(50.0, 5.0), Point::new(5.0, 80.0)];
    let circuits = CircuitRouter::new()
        .with_topology(Topology::Star)
        .route(panel, &targets, DEFAULT_WIRE)
        .unwrap();

    for ckt in &circuits {
        assert_eq!(ckt.source(), Some(&panel));
    }
    assert_eq!(circuits[1].target(), Some(&targets[1]));
}

#[test]
fn test_reference_scenario() {
    // source (0,0), targets (10,0) then (10,10): two straight hops that
    // stay two points each after simplification.
    let circuits = CircuitRouter::new()
        .route(
            Point::new(0.0, 0.0),
            &[Point::new(10.0, 0.0), Point::new(10.0, 10.0)],
            "14/2",
        )
        .unwrap();

    assert_eq!(circuits.len(), 2);
    assert_eq!(circuits[0].id, "ckt_1");
    assert_eq!(
        circuits[0].path,
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]
    );
    assert_eq!(circuits[1].id, "ckt_2");
    assert_eq!(
        circuits[1].path,
        vec![Point::new(10.0, 0.0), Point::new(10.0, 10.0)]
    );
}

#[test]
fn test_custom_wire_label() {
    let circuits = CircuitRouter::new()
        .route(Point::new(0.0, 0.0), &[Point::new(1.0, 1.0)], "12/3 AWG")
        .unwrap();
    assert_eq!(circuits[0].wire, "12/3 AWG");
}

#[test]
fn test_manhattan_planner_hops() {
    let circuits = CircuitRouter::new()
        .with_planner(Box::new(ManhattanPlanner))
        .route(
            Point::new(0.0, 0.0),
            &[Point::new(100.0, 0.0), Point::new(200.0, 50.0)],
            DEFAULT_WIRE,
        )
        .unwrap();

    // Axis-aligned hop stays straight; diagonal hop becomes an L-route
    // whose corner survives the route tolerance.
    assert_eq!(circuits[0].path.len(), 2);
    assert_eq!(circuits[1].path.len(), 3);
    assert_eq!(circuits[1].path[1], Point::new(200.0, 0.0));
    assert_eq!(circuits[1].source(), Some(&Point::new(100.0, 0.0)));
    assert_eq!(circuits[1].target(), Some(&Point::new(200.0, 50.0)));
}

#[test]
fn test_loose_epsilon_collapses_l_route() {
    // With a tolerance wider than the corner deviation, the L-route
    // simplifies down to its endpoints.
    let circuits = CircuitRouter::new()
        .with_planner(Box::new(ManhattanPlanner))
        .with_epsilon(1000.0)
        .route(Point::new(0.0, 0.0), &[Point::new(200.0, 100.0)], DEFAULT_WIRE)
        .unwrap();
    assert_eq!(
        circuits[0].path,
        vec![Point::new(0.0, 0.0), Point::new(200.0, 100.0)]
    );
}

#[test]
fn test_planned_paths_keep_endpoints_after_simplification() {
    let from = Point::new(-3.0, 17.0);
    let to = Point::new(41.0, -2.0);
    for planner in [&DirectPlanner as &dyn PathPlanner, &ManhattanPlanner] {
        let raw = planner.plan(from, to);
        let simplified = simplify(&raw, 1.0);
        assert_eq!(simplified.first(), Some(&from));
        assert_eq!(simplified.last(), Some(&to));
    }
}
