//! Path recovery from a solver's predecessor table.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use log::warn;
use num_traits::Float;

use crate::algorithm::ShortestPathResult;
use crate::graph::WeightedGraph;
use crate::{Error, Result};

/// Walks predecessor links back from `target` to `source` and returns the
/// vertices from `source` to `target` inclusive.
///
/// Fails with [`Error::NoPathExists`] when the walk runs out of predecessors
/// before reaching `source`, and with [`Error::CyclicPredecessors`] if it
/// comes back to a vertex it has already passed. The latter cannot happen
/// with a table produced by a completed run on the same graph, unless that
/// run flagged a negative cycle.
pub fn reconstruct_path(predecessors: &[Option<usize>], source: usize, target: usize) -> Result<Vec<usize>> {
    let n = predecessors.len();
    if source >= n {
        return Err(Error::InvalidVertex(source));
    }
    if target >= n {
        return Err(Error::InvalidVertex(target));
    }

    let mut seen = vec![false; n];
    seen[target] = true;
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        let prev = match predecessors[current] {
            Some(prev) => prev,
            None => return Err(Error::NoPathExists { from: source, to: target }),
        };
        if prev >= n {
            return Err(Error::InvalidVertex(prev));
        }
        if seen[prev] {
            warn!("Predecessor chain from {} loops back to {}", target, prev);
            return Err(Error::CyclicPredecessors { vertex: prev });
        }

        seen[prev] = true;
        path.push(prev);
        current = prev;
    }

    path.reverse();
    Ok(path)
}

/// [`reconstruct_path`] in terms of vertex keys
pub fn reconstruct_labeled_path<K, W, Q>(
    graph: &WeightedGraph<K, W>,
    result: &ShortestPathResult<W>,
    target: &Q,
) -> Result<Vec<K>>
where
    K: Clone + Eq + Hash + Debug + Borrow<Q>,
    W: Float + Debug,
    Q: Hash + Eq + Debug + ?Sized,
{
    let target = graph.require_index(target)?;
    let path = reconstruct_path(&result.predecessors, result.source, target)?;

    path.into_iter()
        .map(|idx| graph.vertex(idx).cloned().ok_or(Error::InvalidVertex(idx)))
        .collect()
}

/// Total weight along `path`, taking the lightest edge between each pair of
/// consecutive vertices. `None` if some step has no edge.
pub fn path_weight<K, W>(graph: &WeightedGraph<K, W>, path: &[usize]) -> Option<W>
where
    K: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    let mut total = W::zero();
    for step in path.windows(2) {
        let lightest = graph
            .edges_from(step[0])
            .filter(|edge| edge.target == step[1])
            .map(|edge| edge.weight)
            .fold(None, |best: Option<W>, w| Some(best.map_or(w, |b| b.min(w))))?;
        total = total + lightest;
    }
    Some(total)
}
