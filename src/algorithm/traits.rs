use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::graph::{Graph, WeightedGraph};
use crate::path::reconstruct_path;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Distances from source to each vertex; `W::infinity()` marks unreachable
    pub distances: Vec<W>,

    /// Vertex each entry was last improved from, `None` if never improved
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex index
    pub source: usize,

    /// Whether one more relaxation pass could still improve a distance.
    /// Only label-correcting runs set this; `None` otherwise.
    pub negative_cycle: Option<bool>,

    /// Vertices whose distance still relaxed in the detection pass, when a
    /// full cycle report was requested
    pub cycle_vertices: Vec<usize>,

    /// Relaxation passes performed (Bellman-Ford) or vertices settled (Dijkstra)
    pub passes: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Fresh tables for a run from `source`: everything unreachable except the
    /// source itself at zero
    pub(crate) fn initial(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![W::infinity(); vertex_count];
        distances[source] = W::zero();
        ShortestPathResult {
            distances,
            predecessors: vec![None; vertex_count],
            source,
            negative_cycle: None,
            cycle_vertices: Vec::new(),
            passes: 0,
        }
    }

    /// Finite distance to `vertex`, `None` if unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|distance| distance.is_finite())
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle.unwrap_or(false)
    }

    /// Distances paired with the vertex keys of `graph`, in vertex order
    pub fn labeled_distances<'g, K>(&self, graph: &'g WeightedGraph<K, W>) -> Vec<(&'g K, Option<W>)>
    where
        K: Clone + Eq + Hash + Debug,
    {
        graph
            .vertices()
            .iter()
            .enumerate()
            .map(|(idx, key)| (key, self.distance(idx)))
            .collect()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Result<Vec<usize>> {
        reconstruct_path(&result.predecessors, result.source, target)
    }
}
