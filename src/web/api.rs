use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use log::{info, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::geo::GeoPoint;
use crate::graph::{EdgePolicy, Graph, MutableGraph, UndirectedGraph};
use crate::order;
use crate::web::models::*;
use crate::Error;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_max_sessions(crate::web::ServerConfig::default().max_sessions)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "state_poisoned",
                "Session store is unavailable".to_string(),
            )
        })
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
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/graphs/:session_id/vertices", post(add_vertices))
        .route("/api/graphs/:session_id/edges", post(add_edges))
        .route("/api/graphs/:session_id/route", post(find_route))
        .route("/api/graphs/:session_id/orders", post(create_order))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
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

fn session_not_found(session_id: Uuid) -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        "session_not_found",
        format!("Session {} not found", session_id),
    )
}

fn domain_error(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::VertexNotFound(_) => (StatusCode::NOT_FOUND, "vertex_not_found"),
        Error::EndpointNotFound(_) => (StatusCode::BAD_REQUEST, "endpoint_not_found"),
        Error::NegativeWeight(_) => (StatusCode::BAD_REQUEST, "negative_weight"),
        Error::InvalidLocation { .. } => (StatusCode::BAD_REQUEST, "invalid_location"),
        Error::MissingField(_) => (StatusCode::BAD_REQUEST, "missing_field"),
    };
    api_error(status, code, err.to_string())
}

/// Checks every vertex before any of them is inserted
fn validate_vertices(vertices: &[VertexInput]) -> Result<Vec<(&str, GeoPoint)>, ApiError> {
    vertices
        .iter()
        .map(|v| {
            GeoPoint::validated(v.latitude, v.longitude)
                .map(|point| (v.name.as_str(), point))
                .map_err(domain_error)
        })
        .collect()
}

fn insert_vertices(graph: &mut UndirectedGraph<GeoPoint>, vertices: Vec<(&str, GeoPoint)>) -> usize {
    vertices
        .into_iter()
        .filter(|(name, point)| graph.add_vertex(name, *point))
        .count()
}

/// Inserts edges, filling in missing weights with the great-circle distance
fn insert_edges(
    graph: &mut UndirectedGraph<GeoPoint>,
    edges: &[EdgeInput],
    policy: EdgePolicy,
) -> crate::Result<usize> {
    let resolved: Vec<(&str, &str, f64)> = edges
        .iter()
        .map(|edge| {
            let weight = edge.weight.unwrap_or_else(|| {
                match (graph.location(&edge.source), graph.location(&edge.destination)) {
                    (Some(a), Some(b)) => a.distance_km(b),
                    // Endpoint missing; add_edges skips or rejects the edge
                    _ => 0.0,
                }
            });
            (edge.source.as_str(), edge.destination.as_str(), weight)
        })
        .collect();

    graph.add_edges(resolved, policy)
}

fn to_web_graph(graph: &UndirectedGraph<GeoPoint>) -> WebGraph {
    let nodes = graph
        .vertex_names()
        .filter_map(|name| {
            graph.location(name).map(|point| WebNode {
                name: name.to_string(),
                latitude: point.latitude,
                longitude: point.longitude,
            })
        })
        .collect();

    let links = graph
        .edges()
        .map(|(source, target, weight)| WebEdge {
            source: source.to_string(),
            target: target.to_string(),
            weight,
        })
        .collect();

    WebGraph { nodes, links }
}

fn mutation_response(
    session_id: Uuid,
    graph: &UndirectedGraph<GeoPoint>,
    vertices_added: usize,
    edges_added: usize,
) -> MutationResponse {
    MutationResponse {
        session_id,
        vertices_added,
        edges_added,
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
    }
}

/// Create a new graph session, optionally seeded with vertices and edges
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<CreateGraphRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    let vertices = validate_vertices(&request.vertices)?;

    let mut graph = UndirectedGraph::with_capacity(vertices.len());
    let vertices_added = insert_vertices(&mut graph, vertices);
    let edges_added =
        insert_edges(&mut graph, &request.edges, request.policy).map_err(domain_error)?;

    let mut sessions = state.lock()?;
    if sessions.len() >= state.max_sessions {
        warn!("rejecting new session: limit of {} reached", state.max_sessions);
        return Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "session_limit_reached",
            format!("At most {} sessions can be open", state.max_sessions),
        ));
    }

    let session = Session::new(graph);
    let response = mutation_response(session.id, &session.graph, vertices_added, edges_added);
    info!(
        "created session {} with {} vertices and {} edges",
        session.id, response.vertex_count, response.edge_count
    );
    sessions.insert(session.id, session);

    Ok(Json(response))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let sessions = state.lock()?;

    match sessions.get(&session_id) {
        Some(session) => Ok(Json(to_web_graph(&session.graph))),
        None => Err(session_not_found(session_id)),
    }
}

/// Add vertices to a session graph; existing names are left untouched
pub async fn add_vertices(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddVerticesRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    let vertices = validate_vertices(&request.vertices)?;

    let mut sessions = state.lock()?;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| session_not_found(session_id))?;

    let added = insert_vertices(&mut session.graph, vertices);
    Ok(Json(mutation_response(session_id, &session.graph, added, 0)))
}

/// Add edges to a session graph
pub async fn add_edges(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddEdgesRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    let mut sessions = state.lock()?;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| session_not_found(session_id))?;

    // A rejected strict batch must not leave a partial insert behind
    let mut staged = session.graph.clone();
    let added = insert_edges(&mut staged, &request.edges, request.policy).map_err(domain_error)?;
    session.graph = staged;

    Ok(Json(mutation_response(session_id, &session.graph, 0, added)))
}

/// Find the shortest route between two vertices of a session graph
pub async fn find_route(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let sessions = state.lock()?;
    let session = sessions
        .get(&session_id)
        .ok_or_else(|| session_not_found(session_id))?;

    let start_time = Instant::now();
    let route = session.graph.route(&request.source, &request.destination);
    let execution_time = start_time.elapsed();

    Ok(Json(RouteResponse {
        source: request.source,
        destination: request.destination,
        found: route.is_some(),
        distance: route.as_ref().map(|r| r.distance),
        path: route.map(|r| r.vertices).unwrap_or_default(),
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    }))
}

/// Place a delivery order with a venue of a session graph
pub async fn create_order(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<OrderRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let customer = GeoPoint::validated(request.customer.latitude, request.customer.longitude)
        .map_err(domain_error)?;

    let sessions = state.lock()?;
    let session = sessions
        .get(&session_id)
        .ok_or_else(|| session_not_found(session_id))?;

    let confirmation = order::place_order(&session.graph, &request.form, customer, &request.venue)
        .map_err(domain_error)?;

    Ok(Json(OrderResponse {
        order_id: Uuid::new_v4(),
        venue: confirmation.venue,
        distance_km: confirmation.distance_km,
        message: confirmation.message,
        placed_at: Utc::now(),
    }))
}

/// List all open sessions
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionSummary>>, ApiError> {
    let sessions = state.lock()?;

    let mut summaries: Vec<SessionSummary> = sessions
        .values()
        .map(|session| SessionSummary {
            id: session.id,
            vertex_count: session.graph.vertex_count(),
            edge_count: session.graph.edge_count(),
            created_at: session.created_at,
        })
        .collect();
    summaries.sort_by_key(|s| s.created_at);

    Ok(Json(summaries))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let sessions = state.lock()?.len();

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sessions,
        timestamp: Utc::now(),
    }))
}
