use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::GeoPoint;
use crate::graph::{EdgePolicy, UndirectedGraph};
use crate::order::OrderForm;

/// A named location submitted by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexInput {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// An edge submitted by a client; without a weight the great-circle
/// distance between the endpoints is used
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeInput {
    pub source: String,
    pub destination: String,
    #[serde(default)]
    pub weight: Option<f64>,
}

/// Parameters for creating a graph session
#[derive(Debug, Default, Deserialize)]
pub struct CreateGraphRequest {
    #[serde(default)]
    pub vertices: Vec<VertexInput>,
    #[serde(default)]
    pub edges: Vec<EdgeInput>,
    #[serde(default)]
    pub policy: EdgePolicy,
}

#[derive(Debug, Deserialize)]
pub struct AddVerticesRequest {
    pub vertices: Vec<VertexInput>,
}

#[derive(Debug, Deserialize)]
pub struct AddEdgesRequest {
    pub edges: Vec<EdgeInput>,
    #[serde(default)]
    pub policy: EdgePolicy,
}

/// Result of a request that created or mutated a graph
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse {
    pub session_id: Uuid,
    pub vertices_added: usize,
    pub edges_added: usize,
    pub vertex_count: usize,
    pub edge_count: usize,
}

/// Represents a vertex in the graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Represents an edge in the graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Represents a complete graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

/// Parameters for a route query
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub source: String,
    pub destination: String,
}

/// Route query outcome; an unreachable destination has `found: false`
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub source: String,
    pub destination: String,
    pub found: bool,
    pub path: Vec<String>,
    /// Total route weight, in the units of the edge weights (kilometres
    /// when the weights were derived from vertex locations)
    pub distance: Option<f64>,
    pub execution_time_ms: f64,
}

/// An order placed with one of the venues of a session graph
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    #[serde(flatten)]
    pub form: OrderForm,
    pub customer: GeoPoint,
    pub venue: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub order_id: Uuid,
    pub venue: String,
    pub distance_km: f64,
    pub message: String,
    pub placed_at: DateTime<Utc>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions: usize,
    pub timestamp: DateTime<Utc>,
}

/// Session containing a graph
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub graph: UndirectedGraph<GeoPoint>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: UndirectedGraph<GeoPoint>) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            created_at: Utc::now(),
        }
    }
}
