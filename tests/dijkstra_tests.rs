use relax_paths::algorithm::dijkstra::Dijkstra;
use relax_paths::algorithm::ShortestPathAlgorithm;
use relax_paths::path::reconstruct_labeled_path;
use relax_paths::{Error, FrontierMode, GraphBuilder, WeightedGraph};

fn undirected_triangle() -> WeightedGraph<&'static str, f64> {
    let mut builder = GraphBuilder::new();
    builder
        .add_symmetric_edge("A", "B", 1.0)
        .unwrap()
        .add_symmetric_edge("B", "C", 2.0)
        .unwrap()
        .add_symmetric_edge("A", "C", 5.0)
        .unwrap();
    builder.build()
}

#[test]
fn test_undirected_triangle() {
    let graph = undirected_triangle();
    assert_eq!(graph.edge_count(), 6);

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let a = graph.index_of("A").unwrap();
    let b = graph.index_of("B").unwrap();
    let c = graph.index_of("C").unwrap();

    assert_eq!(result.distance(a), Some(0.0));
    assert_eq!(result.distance(b), Some(1.0));
    assert_eq!(result.distance(c), Some(3.0));
    assert_eq!(result.predecessor(c), Some(b));
    assert_eq!(result.negative_cycle, None);

    let path = reconstruct_labeled_path(&graph, &result, "C").unwrap();
    assert_eq!(path, vec!["A", "B", "C"]);
}

#[test]
fn test_frontier_modes_agree() {
    for mode in [FrontierMode::BinaryHeap, FrontierMode::LinearScan] {
        let graph = undirected_triangle();
        let result = Dijkstra::new()
            .with_frontier_mode(mode)
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        assert_eq!(result.distances, vec![0.0, 1.0, 3.0], "mode {:?}", mode);
        assert_eq!(result.passes, 3);
    }
}

// Equal distances are settled in insertion order in both modes
#[test]
fn test_tie_break_by_insertion_order() {
    let graph = WeightedGraph::from_edges([
        ("S", "A", 1.0),
        ("S", "B", 1.0),
        ("A", "C", 1.0),
        ("B", "C", 1.0),
    ])
    .unwrap();
    let a = graph.index_of("A").unwrap();
    let c = graph.index_of("C").unwrap();

    for mode in [FrontierMode::BinaryHeap, FrontierMode::LinearScan] {
        let result = Dijkstra::new()
            .with_frontier_mode(mode)
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        assert_eq!(result.distance(c), Some(2.0));
        assert_eq!(result.predecessor(c), Some(a), "mode {:?}", mode);
    }
}

#[test]
fn test_unreachable_vertices_stop_the_search() {
    let mut builder = GraphBuilder::new();
    builder.add_edge("A", "B", 3.0).unwrap();
    builder.add_edge("C", "D", 1.0).unwrap();
    let graph: WeightedGraph<&str, f64> = builder.build();

    for mode in [FrontierMode::BinaryHeap, FrontierMode::LinearScan] {
        let result = Dijkstra::new()
            .with_frontier_mode(mode)
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        assert_eq!(result.passes, 2);
        assert!(result.distances[graph.index_of("C").unwrap()].is_infinite());
        assert!(!result.is_reachable(graph.index_of("D").unwrap()));

        let err = reconstruct_labeled_path(&graph, &result, "D").unwrap_err();
        assert!(matches!(err, Error::NoPathExists { .. }));
    }
}

#[test]
fn test_parallel_edges_use_lightest() {
    let graph = WeightedGraph::from_edges([(0, 1, 9.0), (0, 1, 4.0), (1, 2, 1.0), (0, 2, 6.0)]).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances, vec![0.0, 4.0, 5.0]);
    assert_eq!(result.predecessors, vec![None, Some(0), Some(1)]);
}

#[test]
fn test_zero_weight_edges() {
    let graph = WeightedGraph::from_edges([(0, 1, 0.0), (1, 2, 0.0), (0, 2, 1.0)]).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances, vec![0.0, 0.0, 0.0]);
    assert_eq!(result.predecessor(2), Some(1));
}

#[test]
fn test_weight_validation() {
    let graph = WeightedGraph::from_edges([("A", "B", 1.0), ("B", "C", -1.0)]).unwrap();

    let err = Dijkstra::new()
        .with_weight_validation(true)
        .compute_shortest_paths(&graph, 0)
        .unwrap_err();
    match err {
        Error::PreconditionViolation { from, to, weight } => {
            assert_eq!(from, graph.index_of("B").unwrap());
            assert_eq!(to, graph.index_of("C").unwrap());
            assert_eq!(weight, -1.0);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // unchecked runs do not complain
    assert!(Dijkstra::new().compute_shortest_paths(&graph, 0).is_ok());
    assert!(graph.validate_non_negative().is_err());
}

#[test]
fn test_unknown_source() {
    let graph = undirected_triangle();
    let err = Dijkstra::new().compute_shortest_paths(&graph, 3).unwrap_err();
    assert!(matches!(err, Error::SourceNotFound));
}
