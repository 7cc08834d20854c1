use std::fmt::Debug;
use log::debug;
use num_traits::Float;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{Frontier, FrontierMode};
use crate::graph::weighted::precondition_violation;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic label-setting Dijkstra search.
///
/// Requires every edge weight to be non-negative. That precondition is not
/// checked unless [`Dijkstra::with_weight_validation`] is enabled; with a
/// negative edge the distances are silently wrong.
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    frontier_mode: FrontierMode,
    validate_weights: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Choose how the next vertex is selected
    pub fn with_frontier_mode(mut self, mode: FrontierMode) -> Self {
        self.frontier_mode = mode;
        self
    }

    /// Reject graphs with a negative edge with [`Error::PreconditionViolation`]
    pub fn with_weight_validation(mut self, validate: bool) -> Self {
        self.validate_weights = validate;
        self
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }
        if self.validate_weights {
            if let Some(edge) = graph.first_negative_edge() {
                return Err(precondition_violation(&edge));
            }
        }

        let n = graph.vertex_count();
        debug!(
            "Dijkstra ({:?} frontier) from {} over {} vertices and {} edges",
            self.frontier_mode,
            source,
            n,
            graph.edge_count()
        );

        let mut result = ShortestPathResult::initial(n, source);
        let mut frontier = Frontier::new(self.frontier_mode, n);
        frontier.offer(source, W::zero());

        while let Some(u) = frontier.settle_next(&result.distances) {
            let dist_u = result.distances[u];

            for edge in graph.outgoing_edges(u) {
                let v = edge.target;
                if frontier.is_settled(v) {
                    continue;
                }

                let new_dist = dist_u + edge.weight;
                if new_dist < result.distances[v] {
                    result.distances[v] = new_dist;
                    result.predecessors[v] = Some(u);
                    frontier.offer(v, new_dist);
                }
            }
        }

        result.passes = frontier.settled_count();
        debug!(
            "Dijkstra ({:?} frontier) settled {} of {} vertices",
            frontier.mode(),
            result.passes,
            n
        );

        Ok(result)
    }
}
