use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::graph::WeightedGraph;
use crate::io::EdgeRecord;

/// Graph upload, either as JSON records or as raw CSV text
#[derive(Debug, Deserialize)]
pub struct CreateGraphRequest {
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
    /// CSV edge list with a header row; rejected when `edges` is also given
    #[serde(default)]
    pub csv: Option<String>,
    /// Insert every edge in both directions
    #[serde(default)]
    pub undirected: bool,
}

/// Graph contents as stored in a session
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub vertices: Vec<String>,
    pub edges: Vec<EdgeRecord>,
}

/// Parameters for a single-source run
#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    pub source: String,
    /// `"bellman-ford"` or `"dijkstra"`; picked from the weights when absent
    #[serde(default)]
    pub algorithm: Option<String>,
    /// Fail on a reachable negative cycle instead of flagging it
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub iteration_limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VertexDistance {
    pub vertex: String,
    /// `None` when unreachable
    pub distance: Option<f64>,
    pub predecessor: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SolveResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: String,
    pub vertices: Vec<VertexDistance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_cycle: Option<bool>,
    pub passes: usize,
    pub execution_time_ms: f64,
}

#[derive(Debug, Deserialize)]
pub struct PathRequest {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub algorithm: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    pub algorithm: String,
    pub source: String,
    pub target: String,
    pub vertices: Vec<String>,
    pub total_weight: f64,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// An uploaded graph. The graph is frozen and shared by every request
/// against the session; results are never stored.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub graph: Arc<WeightedGraph<String, f64>>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: WeightedGraph<String, f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph: Arc::new(graph),
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> GraphSummary {
        let vertices = self.graph.vertices().to_vec();
        let edges = self
            .graph
            .all_edges()
            .map(|edge| EdgeRecord {
                source: vertices[edge.source].clone(),
                target: vertices[edge.target].clone(),
                weight: edge.weight,
            })
            .collect();

        GraphSummary {
            id: self.id,
            created_at: self.created_at,
            vertices,
            edges,
        }
    }
}
