//! Seedable random graph fixtures.
//!
//! Every generator takes the random source as a parameter so tests can pin a
//! seed with `StdRng::seed_from_u64`.

use rand::Rng;

use crate::graph::{GraphBuilder, WeightedGraph};
use crate::Result;

/// Generates a "forward complete" graph on `n` vertices: one edge `i -> j`
/// for every `i < j`, each with an integer weight drawn uniformly from 1..=10.
///
/// The result is acyclic and has only positive weights, so both solvers
/// apply.
pub fn forward_complete_graph<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<WeightedGraph<usize, f64>> {
    let mut builder = GraphBuilder::with_capacity(n, n * n.saturating_sub(1) / 2);
    for v in 0..n {
        builder.add_vertex(v);
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let weight = rng.gen_range(1..=10) as f64;
            builder.add_edge(i, j, weight)?;
        }
    }

    Ok(builder.build())
}

/// Generates a random DAG with vertices labelled `Node0`, `Node1`, ...
///
/// Each forward pair `i < j` receives an edge with probability
/// `edge_probability`; the weight is drawn from 1..=10 and negated with
/// probability `negative_weight_probability`. Negative weights never form a
/// cycle here since every edge points forward.
pub fn random_dag<R: Rng + ?Sized>(
    num_nodes: usize,
    edge_probability: f64,
    negative_weight_probability: f64,
    rng: &mut R,
) -> Result<WeightedGraph<String, f64>> {
    assert!((0.0..=1.0).contains(&edge_probability), "edge_probability must be in [0, 1]");
    assert!(
        (0.0..=1.0).contains(&negative_weight_probability),
        "negative_weight_probability must be in [0, 1]"
    );

    let labels: Vec<String> = (0..num_nodes).map(|i| format!("Node{}", i)).collect();
    let mut builder = GraphBuilder::with_capacity(num_nodes, 0);
    for label in &labels {
        builder.add_vertex(label.clone());
    }

    for i in 0..num_nodes {
        for j in (i + 1)..num_nodes {
            if rng.gen_bool(edge_probability) {
                let mut weight = rng.gen_range(1..=10) as f64;
                if rng.gen_bool(negative_weight_probability) {
                    weight = -weight;
                }
                builder.add_edge(labels[i].clone(), labels[j].clone(), weight)?;
            }
        }
    }

    Ok(builder.build())
}

/// Generates a random directed graph with `n` vertices and `edge_count`
/// edges (self-loops excluded, parallel edges allowed) whose weights are
/// drawn uniformly from `min_weight..max_weight`.
pub fn random_graph<R: Rng + ?Sized>(
    n: usize,
    edge_count: usize,
    min_weight: f64,
    max_weight: f64,
    rng: &mut R,
) -> Result<WeightedGraph<usize, f64>> {
    assert!(min_weight < max_weight, "min_weight must be below max_weight");

    let mut builder = GraphBuilder::with_capacity(n, edge_count);
    for v in 0..n {
        builder.add_vertex(v);
    }
    if n < 2 {
        return Ok(builder.build());
    }

    let mut added = 0;
    while added < edge_count {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            builder.add_edge(u, v, rng.gen_range(min_weight..max_weight))?;
            added += 1;
        }
    }

    Ok(builder.build())
}
