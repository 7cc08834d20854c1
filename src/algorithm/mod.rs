pub mod traits;
pub mod bellman_ford;
pub mod dijkstra;

use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::str::FromStr;
use log::info;
use num_traits::Float;

use crate::graph::{Graph, WeightedGraph};
use crate::{Error, Result};
use self::bellman_ford::BellmanFord;
use self::dijkstra::Dijkstra;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};

/// Solver selector for [`solve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BellmanFord,
    Dijkstra,
}

impl Algorithm {
    /// Dijkstra when every weight is non-negative, Bellman-Ford otherwise
    pub fn for_graph<W, G>(graph: &G) -> Self
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        if graph.first_negative_edge().is_some() {
            Algorithm::BellmanFord
        } else {
            Algorithm::Dijkstra
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::BellmanFord => "bellman-ford",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "bellman-ford" | "bellmanford" | "bf" => Ok(Algorithm::BellmanFord),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Runs the selected solver with its default configuration
pub fn solve<W, G>(graph: &G, source: usize, algorithm: Algorithm) -> Result<ShortestPathResult<W>>
where
    W: Float + Debug,
    G: Graph<W>,
{
    let result = match algorithm {
        Algorithm::BellmanFord => BellmanFord::new().compute_shortest_paths(graph, source),
        Algorithm::Dijkstra => Dijkstra::new().compute_shortest_paths(graph, source),
    }?;

    info!(
        "{} from vertex {}: {} of {} vertices reachable",
        algorithm,
        source,
        result.distances.iter().filter(|d| d.is_finite()).count(),
        graph.vertex_count()
    );
    Ok(result)
}

/// Like [`solve`], with the source given by key
pub fn solve_labeled<K, W, Q>(
    graph: &WeightedGraph<K, W>,
    source: &Q,
    algorithm: Algorithm,
) -> Result<ShortestPathResult<W>>
where
    K: Clone + Eq + Hash + Debug + std::borrow::Borrow<Q>,
    W: Float + Debug,
    Q: Hash + Eq + Debug + ?Sized,
{
    let source = graph.require_index(source)?;
    solve(graph, source, algorithm)
}
