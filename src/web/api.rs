use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::info;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{Algorithm, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::WeightedGraph;
use crate::io::{build_graph, read_graph, EdgeDirection};
use crate::layout::{circular_layout, CanvasConfig, GraphLayout};
use crate::path::reconstruct_path;
use crate::web::models::*;
use crate::Error;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    max_sessions: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_max_sessions(1000)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
        }
    }

    fn sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "state_poisoned", "Session store is unavailable".to_string())
        })
    }

    fn session(&self, id: &Uuid) -> Result<Session, ApiError> {
        self.sessions()?
            .get(id)
            .cloned()
            .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/:session_id", get(get_graph).delete(delete_graph))
        .route("/api/graphs/:session_id/layout", get(get_layout))
        .route("/api/graphs/:session_id/solve", post(solve_graph))
        .route("/api/graphs/:session_id/path", post(find_path))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

/// Upload a graph and open a session for it
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<CreateGraphRequest>,
) -> Result<(StatusCode, Json<GraphSummary>), ApiError> {
    let direction = if request.undirected {
        EdgeDirection::Undirected
    } else {
        EdgeDirection::Directed
    };

    let graph = match request.csv {
        Some(_) if !request.edges.is_empty() => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "invalid_graph",
                "Send either `csv` or `edges`, not both".to_string(),
            ));
        }
        Some(text) => read_graph(text.as_bytes(), direction).map_err(core_error)?,
        None => build_graph(request.edges, direction).map_err(core_error)?,
    };

    let session = Session::new(graph);
    let summary = session.summary();

    {
        let mut sessions = state.sessions()?;
        if sessions.len() >= state.max_sessions {
            return Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "session_limit",
                format!("At most {} sessions may be open", state.max_sessions),
            ));
        }
        sessions.insert(session.id, session);
    }

    info!(
        "Opened session {} ({} vertices, {} edges)",
        summary.id,
        summary.vertices.len(),
        summary.edges.len()
    );
    Ok((StatusCode::CREATED, Json(summary)))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<GraphSummary>, ApiError> {
    Ok(Json(state.session(&session_id)?.summary()))
}

/// Close a session
pub async fn delete_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    match state.sessions()?.remove(&session_id) {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string())),
    }
}

/// Circular layout of the session graph
pub async fn get_layout(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<GraphLayout>, ApiError> {
    let session = state.session(&session_id)?;
    Ok(Json(circular_layout(&session.graph, &CanvasConfig::default())))
}

/// Run a solver from one source
pub async fn solve_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, ApiError> {
    let session = state.session(&session_id)?;
    let graph = session.graph.as_ref();
    let algorithm = choose_algorithm(graph, request.algorithm.as_deref())?;
    let source = graph.require_index(request.source.as_str()).map_err(core_error)?;

    let mut bellman_ford = BellmanFord::new().with_strict(request.strict);
    if let Some(limit) = request.iteration_limit {
        bellman_ford = bellman_ford.with_iteration_limit(limit);
    }

    let start_time = Instant::now();
    let result = run(graph, source, algorithm, &bellman_ford).map_err(core_error)?;
    let execution_time = start_time.elapsed();

    let keys = graph.vertices();
    let vertices = keys
        .iter()
        .enumerate()
        .map(|(idx, key)| VertexDistance {
            vertex: key.clone(),
            distance: result.distance(idx),
            predecessor: result.predecessor(idx).map(|p| keys[p].clone()),
        })
        .collect();

    Ok(Json(SolveResponse {
        execution_id: Uuid::new_v4(),
        algorithm: algorithm.to_string(),
        source: request.source,
        vertices,
        negative_cycle: result.negative_cycle,
        passes: result.passes,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    }))
}

/// Shortest path between two vertices
pub async fn find_path(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PathRequest>,
) -> Result<Json<PathResponse>, ApiError> {
    let session = state.session(&session_id)?;
    let graph = session.graph.as_ref();
    let algorithm = choose_algorithm(graph, request.algorithm.as_deref())?;
    let source = graph.require_index(request.source.as_str()).map_err(core_error)?;
    let target = graph.require_index(request.target.as_str()).map_err(core_error)?;

    // distances through a negative cycle are meaningless, refuse them outright
    let result = run(graph, source, algorithm, &BellmanFord::strict()).map_err(core_error)?;
    let path = reconstruct_path(&result.predecessors, source, target).map_err(core_error)?;

    let keys = graph.vertices();
    Ok(Json(PathResponse {
        algorithm: algorithm.to_string(),
        source: request.source,
        target: request.target,
        vertices: path.iter().map(|&idx| keys[idx].clone()).collect(),
        total_weight: result.distances[target],
    }))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<Uuid>>, ApiError> {
    let sessions = state.sessions()?;
    Ok(Json(sessions.keys().cloned().collect()))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn choose_algorithm(graph: &WeightedGraph<String, f64>, name: Option<&str>) -> Result<Algorithm, ApiError> {
    match name {
        Some(name) => name.parse().map_err(core_error),
        None => Ok(Algorithm::for_graph(graph)),
    }
}

/// Dijkstra over untrusted input always validates weights
fn run(
    graph: &WeightedGraph<String, f64>,
    source: usize,
    algorithm: Algorithm,
    bellman_ford: &BellmanFord,
) -> crate::Result<ShortestPathResult<f64>> {
    match algorithm {
        Algorithm::BellmanFord => bellman_ford.compute_shortest_paths(graph, source),
        Algorithm::Dijkstra => Dijkstra::new()
            .with_weight_validation(true)
            .compute_shortest_paths(graph, source),
    }
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn core_error(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::UnknownVertex(_) | Error::InvalidVertex(_) | Error::SourceNotFound => {
            (StatusCode::NOT_FOUND, "vertex_not_found")
        }
        Error::NoPathExists { .. } => (StatusCode::NOT_FOUND, "no_path"),
        Error::NegativeCycle { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "negative_cycle"),
        Error::PreconditionViolation { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "negative_weight"),
        Error::IterationLimitExceeded { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "iteration_limit_exceeded"),
        Error::CyclicPredecessors { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "cyclic_predecessors"),
        Error::UnknownAlgorithm(_) => (StatusCode::BAD_REQUEST, "invalid_algorithm"),
        Error::InvalidWeight { .. } | Error::EdgeList { .. } | Error::Csv(_) => {
            (StatusCode::BAD_REQUEST, "invalid_graph")
        }
        Error::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error"),
    };
    api_error(status, code, err.to_string())
}
