//! Relax Paths - single-source shortest paths over weighted directed graphs
//!
//! Two complementary solvers share one immutable graph model:
//!
//! * [`BellmanFord`] - label-correcting, tolerates negative edge weights and
//!   reports reachable negative-weight cycles.
//! * [`Dijkstra`] - label-setting, valid for non-negative weights only.
//!
//! A graph is assembled once through a [`GraphBuilder`], then shared read-only
//! by any number of solver runs. Paths are recovered from a run's predecessor
//! table with [`path::reconstruct_path`].

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod layout;
pub mod path;
pub mod web;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, solve, solve_labeled, Algorithm,
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::FrontierMode;
/// Re-export main types for convenient use
pub use graph::{Edge, GraphBuilder, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex index: {0}")]
    InvalidVertex(usize),

    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Non-finite weight on edge {from} -> {to}")]
    InvalidWeight { from: String, to: String },

    #[error("Negative weight {weight} on edge {from} -> {to} violates a non-negative precondition")]
    PreconditionViolation { from: usize, to: usize, weight: f64 },

    #[error("Negative-weight cycle reachable from source (still relaxing at vertex {vertex})")]
    NegativeCycle { vertex: usize },

    #[error("Relaxation did not converge within {limit} passes")]
    IterationLimitExceeded { limit: usize },

    #[error("No path exists from vertex {from} to vertex {to}")]
    NoPathExists { from: usize, to: usize },

    #[error("Predecessor chain revisits vertex {vertex}")]
    CyclicPredecessors { vertex: usize },

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Malformed edge list at line {line}: {message}")]
    EdgeList { line: u64, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
