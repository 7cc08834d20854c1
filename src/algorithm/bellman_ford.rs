use std::fmt::Debug;
use log::{debug, warn};
use num_traits::Float;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// Label-correcting Bellman-Ford search.
///
/// Runs up to V-1 full passes over every edge, then one detection pass: if any
/// edge can still relax, a negative-weight cycle is reachable from the source.
/// By default the cycle is reported through
/// [`ShortestPathResult::negative_cycle`]; [`BellmanFord::strict`] turns it into
/// [`Error::NegativeCycle`] instead.
#[derive(Debug, Clone)]
pub struct BellmanFord {
    strict: bool,
    iteration_limit: Option<usize>,
    early_exit: bool,
    cycle_report: bool,
}

impl Default for BellmanFord {
    fn default() -> Self {
        Self::new()
    }
}

impl BellmanFord {
    /// Creates a new Bellman-Ford instance in reporting (non-strict) mode
    pub fn new() -> Self {
        BellmanFord {
            strict: false,
            iteration_limit: None,
            early_exit: true,
            cycle_report: false,
        }
    }

    /// Fail with [`Error::NegativeCycle`] instead of flagging
    pub fn strict() -> Self {
        Self::new().with_strict(true)
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Cap the number of relaxation passes. A run that has not converged
    /// within `limit` passes fails with [`Error::IterationLimitExceeded`].
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    /// Stop relaxing once a full pass changes nothing. Results are identical
    /// either way.
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    /// Scan every edge in the detection pass and collect each vertex that can
    /// still be improved, instead of stopping at the first one
    pub fn with_cycle_report(mut self, cycle_report: bool) -> Self {
        self.cycle_report = cycle_report;
        self
    }

    /// Runs the search and calls `observer(pass, distances)` after every
    /// relaxation pass
    pub fn compute_with_observer<W, G, F>(
        &self,
        graph: &G,
        source: usize,
        mut observer: F,
    ) -> Result<ShortestPathResult<W>>
    where
        W: Float + Debug,
        G: Graph<W>,
        F: FnMut(usize, &[W]),
    {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let max_passes = n.saturating_sub(1);
        debug!(
            "Bellman-Ford from {} over {} vertices and {} edges (up to {} passes)",
            source,
            n,
            graph.edge_count(),
            max_passes
        );

        let mut result = ShortestPathResult::initial(n, source);

        for pass in 0..max_passes {
            if let Some(limit) = self.iteration_limit {
                if pass >= limit {
                    warn!("Bellman-Ford still relaxing after {} passes", limit);
                    return Err(Error::IterationLimitExceeded { limit });
                }
            }

            let changed = relax_pass(graph, &mut result.distances, &mut result.predecessors);
            result.passes += 1;
            observer(pass + 1, &result.distances);

            if !changed && self.early_exit {
                debug!("Converged after {} passes", result.passes);
                break;
            }
        }

        result.cycle_vertices = self.detect_cycle(graph, &result.distances);
        let negative_cycle = !result.cycle_vertices.is_empty();
        result.negative_cycle = Some(negative_cycle);

        if negative_cycle {
            let vertex = result.cycle_vertices[0];
            warn!("Negative-weight cycle reachable from {} (vertex {} still relaxes)", source, vertex);
            if self.strict {
                return Err(Error::NegativeCycle { vertex });
            }
            if !self.cycle_report {
                result.cycle_vertices.clear();
            }
        }

        Ok(result)
    }

    /// One extra pass that only checks. Returns the improvable vertices: all of
    /// them with a cycle report, otherwise just the first.
    ///
    /// A distance of negative infinity counts as improvable: only an unbounded
    /// negative walk gets there, and once there no relaxation can lower it.
    fn detect_cycle<W, G>(&self, graph: &G, distances: &[W]) -> Vec<usize>
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        let mut flagged = vec![false; distances.len()];
        let mut vertices = Vec::new();

        for (vertex, &distance) in distances.iter().enumerate() {
            if distance == W::neg_infinity() {
                flagged[vertex] = true;
                vertices.push(vertex);
                if !self.cycle_report {
                    return vertices;
                }
            }
        }

        for edge in graph.edges() {
            let from = distances[edge.source];
            if from == W::infinity() {
                continue;
            }
            if from + edge.weight < distances[edge.target] && !flagged[edge.target] {
                flagged[edge.target] = true;
                vertices.push(edge.target);
                if !self.cycle_report {
                    break;
                }
            }
        }

        vertices
    }
}

/// Relaxes every edge once. Returns whether any distance improved.
fn relax_pass<W, G>(graph: &G, distances: &mut [W], predecessors: &mut [Option<usize>]) -> bool
where
    W: Float + Debug,
    G: Graph<W>,
{
    let mut changed = false;
    for edge in graph.edges() {
        let from = distances[edge.source];
        // unreachable tails never improve anything
        if from == W::infinity() {
            continue;
        }
        let candidate = from + edge.weight;
        if candidate < distances[edge.target] {
            distances[edge.target] = candidate;
            predecessors[edge.target] = Some(edge.source);
            changed = true;
        }
    }
    changed
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Float + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.compute_with_observer(graph, source, |_, _| {})
    }
}
