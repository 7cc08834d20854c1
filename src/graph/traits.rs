use std::fmt::Debug;
use num_traits::Float;

use crate::graph::Edge;

/// Read-only view of a weighted directed graph over dense vertex indices.
///
/// Solvers are generic over this trait and never mutate the graph, so one
/// graph value can back any number of concurrent runs.
pub trait Graph<W>: Debug
where
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges counted separately
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = Edge<W>> + '_>;

    /// Returns an iterator over every edge, grouped by source vertex in vertex
    /// insertion order
    fn edges(&self) -> Box<dyn Iterator<Item = Edge<W>> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// First edge with a negative weight, if any
    fn first_negative_edge(&self) -> Option<Edge<W>> {
        self.edges().find(|edge| edge.weight < W::zero())
    }
}
