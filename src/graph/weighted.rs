use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;

use crate::graph::traits::Graph;
use crate::{Error, Result};

/// A directed weighted edge between two vertex indices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub source: usize,
    pub target: usize,
    pub weight: W,
}

/// Mutable construction phase of a [`WeightedGraph`].
///
/// Endpoints are declared lazily: naming a vertex in `add_edge` registers it
/// if it is unseen. Edges are always appended, so parallel edges between the
/// same ordered pair stay distinct relaxation candidates.
#[derive(Debug, Clone)]
pub struct GraphBuilder<K, W> {
    keys: Vec<K>,
    index: HashMap<K, usize>,
    edges: Vec<Edge<W>>,
    adjacency: Vec<Vec<usize>>,
}

impl<K, W> GraphBuilder<K, W>
where
    K: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Creates an empty builder
    pub fn new() -> Self {
        GraphBuilder {
            keys: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Creates an empty builder with room for the given number of vertices and edges
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        GraphBuilder {
            keys: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            adjacency: Vec::with_capacity(vertices),
        }
    }

    /// Declares a vertex and returns its index. Re-declaring an existing key
    /// returns the index it already has.
    pub fn add_vertex(&mut self, key: K) -> usize {
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.keys.len();
        self.index.insert(key.clone(), idx);
        self.keys.push(key);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Appends a directed edge, registering both endpoints if unseen.
    ///
    /// Fails with [`Error::InvalidWeight`] on NaN or infinite weights; the
    /// graph is left untouched in that case.
    pub fn add_edge(&mut self, source: K, target: K, weight: W) -> Result<&mut Self> {
        if !weight.is_finite() {
            return Err(Error::InvalidWeight {
                from: format!("{:?}", source),
                to: format!("{:?}", target),
            });
        }

        let source = self.add_vertex(source);
        let target = self.add_vertex(target);
        self.adjacency[source].push(self.edges.len());
        self.edges.push(Edge { source, target, weight });
        Ok(self)
    }

    /// Appends `a -> b` and `b -> a` with the same weight
    pub fn add_symmetric_edge(&mut self, a: K, b: K, weight: W) -> Result<&mut Self> {
        self.add_edge(a.clone(), b.clone(), weight)?;
        self.add_edge(b, a, weight)
    }

    /// Appends every `(source, target, weight)` triple in order
    pub fn extend_edges<I>(&mut self, edges: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, K, W)>,
    {
        for (source, target, weight) in edges {
            self.add_edge(source, target, weight)?;
        }
        Ok(self)
    }

    pub fn vertex_count(&self) -> usize {
        self.keys.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Freezes the builder into an immutable graph
    pub fn build(self) -> WeightedGraph<K, W> {
        WeightedGraph {
            keys: self.keys,
            index: self.index,
            edges: self.edges,
            adjacency: self.adjacency,
        }
    }
}

impl<K, W> Default for GraphBuilder<K, W>
where
    K: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable weighted directed graph keyed by `K`.
///
/// Vertices receive dense indices in insertion order; the solvers operate on
/// those indices and [`WeightedGraph::index_of`] / [`WeightedGraph::vertex`]
/// translate between keys and indices.
#[derive(Debug, Clone)]
pub struct WeightedGraph<K, W> {
    keys: Vec<K>,
    index: HashMap<K, usize>,
    /// All edges in insertion order
    edges: Vec<Edge<W>>,
    /// Outgoing edge ids per source vertex
    adjacency: Vec<Vec<usize>>,
}

impl<K, W> WeightedGraph<K, W>
where
    K: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Builds a graph from `(source, target, weight)` triples
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, K, W)>,
    {
        let mut builder = GraphBuilder::new();
        builder.extend_edges(edges)?;
        Ok(builder.build())
    }

    pub fn builder() -> GraphBuilder<K, W> {
        GraphBuilder::new()
    }

    pub fn vertex_count(&self) -> usize {
        self.keys.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertex keys in insertion order
    pub fn vertices(&self) -> &[K] {
        &self.keys
    }

    /// Key of the vertex at `index`
    pub fn vertex(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    /// Index of the vertex with the given key
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    /// Resolves a key to its index or fails with [`Error::UnknownVertex`]
    pub fn require_index<Q>(&self, key: &Q) -> Result<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.index_of(key)
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", key)))
    }

    /// Outgoing edges of `vertex` in insertion order; empty for unknown indices
    pub fn edges_from(&self, vertex: usize) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flatten()
            .map(move |&id| &self.edges[id])
    }

    /// Every edge, grouped by source vertex in vertex insertion order
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.adjacency
            .iter()
            .flatten()
            .map(move |&id| &self.edges[id])
    }

    /// True when no edge carries a negative weight
    pub fn is_non_negative(&self) -> bool {
        self.edges.iter().all(|edge| edge.weight >= W::zero())
    }

    /// Fails with [`Error::PreconditionViolation`] on the first negative edge
    pub fn validate_non_negative(&self) -> Result<()> {
        match self.first_negative_edge() {
            Some(edge) => Err(precondition_violation(&edge)),
            None => Ok(()),
        }
    }
}

pub(crate) fn precondition_violation<W: Float>(edge: &Edge<W>) -> Error {
    Error::PreconditionViolation {
        from: edge.source,
        to: edge.target,
        weight: num_traits::cast(edge.weight).unwrap_or(f64::NAN),
    }
}

impl<K, W> Graph<W> for WeightedGraph<K, W>
where
    K: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.keys.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        Box::new(self.edges_from(vertex).copied())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        Box::new(self.all_edges().copied())
    }
}
