use rand::rngs::StdRng;
use rand::SeedableRng;
use relax_paths::algorithm::bellman_ford::BellmanFord;
use relax_paths::algorithm::ShortestPathAlgorithm;
use relax_paths::graph::generators::random_dag;
use relax_paths::path::reconstruct_path;
use relax_paths::{solve, Algorithm, Error, GraphBuilder, WeightedGraph};

fn five_vertex_graph() -> WeightedGraph<usize, f64> {
    WeightedGraph::from_edges([
        (0, 1, -1.0),
        (0, 2, 4.0),
        (1, 2, 3.0),
        (1, 3, 2.0),
        (1, 4, 2.0),
        (3, 2, 5.0),
        (3, 1, 1.0),
        (4, 3, -3.0),
    ])
    .unwrap()
}

fn two_cycle() -> WeightedGraph<&'static str, f64> {
    WeightedGraph::from_edges([("A", "B", 1.0), ("B", "A", -2.0)]).unwrap()
}

// Distances with negative edges but no negative cycle
#[test]
fn test_negative_edges_without_cycle() {
    let graph = five_vertex_graph();
    let result = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances, vec![0.0, -1.0, 2.0, -2.0, 1.0]);
    assert_eq!(result.negative_cycle, Some(false));
    assert!(!result.has_negative_cycle());

    assert_eq!(result.predecessors, vec![None, Some(0), Some(1), Some(4), Some(1)]);
    assert_eq!(reconstruct_path(&result.predecessors, 0, 3).unwrap(), vec![0, 1, 4, 3]);
}

#[test]
fn test_two_cycle_is_flagged() {
    let graph = two_cycle();
    let result = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.negative_cycle, Some(true));
    assert!(result.has_negative_cycle());
    // without a report only the flag is set
    assert!(result.cycle_vertices.is_empty());
}

#[test]
fn test_strict_mode_fails_on_negative_cycle() {
    let graph = two_cycle();
    let err = BellmanFord::strict().compute_shortest_paths(&graph, 0).unwrap_err();
    assert!(matches!(err, Error::NegativeCycle { .. }), "unexpected error: {:?}", err);

    // a cycle-free graph is unaffected by strict mode
    let result = BellmanFord::strict().compute_shortest_paths(&five_vertex_graph(), 0).unwrap();
    assert_eq!(result.negative_cycle, Some(false));
}

// Large negative weights overflow to -inf, which still counts as a cycle
#[test]
fn test_cycle_overflowing_to_negative_infinity_is_flagged() {
    let mut builder = GraphBuilder::new();
    builder.add_edge("A", "B", -1e308).unwrap();
    builder.add_edge("B", "A", -1e308).unwrap();
    builder.add_vertex("C");
    let graph = builder.build();

    let result = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.negative_cycle, Some(true));
    assert_eq!(result.distances[0], f64::NEG_INFINITY);
    assert_eq!(result.distances[1], f64::NEG_INFINITY);
    assert!(!result.is_reachable(2));

    let report = BellmanFord::new()
        .with_cycle_report(true)
        .compute_shortest_paths(&graph, 0)
        .unwrap();
    assert_eq!(report.cycle_vertices, vec![0, 1]);

    let err = BellmanFord::strict().compute_shortest_paths(&graph, 0).unwrap_err();
    assert!(matches!(err, Error::NegativeCycle { vertex: 0 }), "unexpected error: {:?}", err);
}

#[test]
fn test_cycle_report_scans_every_edge() {
    // two independent negative cycles reachable from S
    let graph = WeightedGraph::from_edges([
        ("S", "A", 1.0),
        ("S", "C", 1.0),
        ("A", "B", 1.0),
        ("B", "A", -3.0),
        ("C", "D", 1.0),
        ("D", "C", -3.0),
    ])
    .unwrap();

    let result = BellmanFord::new()
        .with_cycle_report(true)
        .compute_shortest_paths(&graph, 0)
        .unwrap();

    assert!(result.has_negative_cycle());
    let a = graph.index_of("A").unwrap();
    let c = graph.index_of("C").unwrap();
    let b = graph.index_of("B").unwrap();
    let d = graph.index_of("D").unwrap();
    assert!(result.cycle_vertices.iter().any(|v| *v == a || *v == b));
    assert!(result.cycle_vertices.iter().any(|v| *v == c || *v == d));
}

#[test]
fn test_unreachable_vertex_keeps_infinite_distance() {
    let mut builder = WeightedGraph::builder();
    builder.add_edge("A", "B", 2.0).unwrap();
    builder.add_edge("C", "B", -10.0).unwrap();
    builder.add_vertex("D");
    let graph: WeightedGraph<&str, f64> = builder.build();

    let result = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();
    let c = graph.index_of("C").unwrap();
    let d = graph.index_of("D").unwrap();

    assert!(result.distances[c].is_infinite());
    assert!(result.distances[d].is_infinite());
    assert_eq!(result.distance(c), None);
    assert_eq!(result.predecessor(c), None);
    // C -> B must not drag B below its real distance
    assert_eq!(result.distance(graph.index_of("B").unwrap()), Some(2.0));
    assert!(matches!(
        reconstruct_path(&result.predecessors, 0, d),
        Err(Error::NoPathExists { .. })
    ));
}

#[test]
fn test_parallel_edges_are_not_collapsed() {
    // the heavier parallel edge comes last and must not win
    let graph = WeightedGraph::from_edges([("A", "B", 2.0), ("A", "B", 7.0), ("B", "C", 1.0)]).unwrap();
    assert_eq!(graph.edge_count(), 3);

    let result = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distance(graph.index_of("B").unwrap()), Some(2.0));
    assert_eq!(result.distance(graph.index_of("C").unwrap()), Some(3.0));
}

#[test]
fn test_source_only_distance_is_zero() {
    let graph = five_vertex_graph();
    let result = solve(&graph, 0, Algorithm::BellmanFord).unwrap();
    let zeros: Vec<usize> = (0..graph.vertex_count())
        .filter(|&v| result.distances[v] == 0.0)
        .collect();
    assert_eq!(zeros, vec![0]);
}

#[test]
fn test_distances_never_increase_between_passes() {
    let mut rng = StdRng::seed_from_u64(17);
    let graph = random_dag(40, 0.3, 0.4, &mut rng).unwrap();

    let mut snapshots: Vec<Vec<f64>> = Vec::new();
    let result = BellmanFord::new()
        .with_early_exit(false)
        .compute_with_observer(&graph, 0, |_, distances| snapshots.push(distances.to_vec()))
        .unwrap();

    assert_eq!(snapshots.len(), graph.vertex_count() - 1);
    assert_eq!(result.passes, snapshots.len());
    for window in snapshots.windows(2) {
        for (before, after) in window[0].iter().zip(&window[1]) {
            assert!(after <= before, "distance increased from {} to {}", before, after);
        }
    }
    // forward-only edges can never close a cycle
    assert_eq!(result.negative_cycle, Some(false));
}

#[test]
fn test_early_exit_does_not_change_results() {
    let graph = WeightedGraph::from_edges([(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)]).unwrap();

    let fast = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();
    let full = BellmanFord::new()
        .with_early_exit(false)
        .compute_shortest_paths(&graph, 0)
        .unwrap();

    assert_eq!(fast.distances, full.distances);
    assert_eq!(fast.predecessors, full.predecessors);
    assert_eq!(fast.passes, 2);
    assert_eq!(full.passes, 4);
}

#[test]
fn test_iteration_limit() {
    // inserted back to front so each pass advances one hop only
    let graph = WeightedGraph::from_edges([(3, 4, 1.0), (2, 3, 1.0), (1, 2, 1.0), (0, 1, 1.0)]).unwrap();
    let source = graph.index_of(&0).unwrap();

    let err = BellmanFord::new()
        .with_iteration_limit(2)
        .compute_shortest_paths(&graph, source)
        .unwrap_err();
    assert!(matches!(err, Error::IterationLimitExceeded { limit: 2 }));

    let result = BellmanFord::new()
        .with_iteration_limit(4)
        .compute_shortest_paths(&graph, source)
        .unwrap();
    assert_eq!(result.distance(graph.index_of(&4).unwrap()), Some(4.0));
}

#[test]
fn test_unknown_source() {
    let graph = five_vertex_graph();
    let err = BellmanFord::new().compute_shortest_paths(&graph, 99).unwrap_err();
    assert!(matches!(err, Error::SourceNotFound));
}
