pub mod traits;
pub mod weighted;
pub mod generators;

pub use traits::Graph;
pub use weighted::{Edge, GraphBuilder, WeightedGraph};
