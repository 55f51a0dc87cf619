//! Route Graph - weighted undirected location graphs with Dijkstra routing
//!
//! Vertices are named points of interest carrying a location payload, edges are
//! symmetric weighted links between them (typically the Haversine distance in
//! kilometres). Shortest routes are computed with Dijkstra's algorithm over a
//! binary-heap priority queue.
//!
//! On top of the core graph the crate ships the pieces of a small delivery
//! service: order validation and acknowledgment, random geographic graph
//! generators, and an axum HTTP API that keeps graphs in sessions.

pub mod algorithm;
pub mod data_structures;
pub mod geo;
pub mod graph;
pub mod order;
pub mod web;

pub use algorithm::{dijkstra::Dijkstra, PathResult, ShortestPathAlgorithm};
/// Re-export main types for convenient use
pub use geo::{haversine_km, GeoPoint};
pub use graph::undirected::{EdgePolicy, Route, UndirectedGraph};
pub use order::{place_order, OrderConfirmation, OrderForm};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Edge endpoint not found: {0}")]
    EndpointNotFound(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidLocation { latitude: f64, longitude: f64 },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
