use crate::algorithm::{Dijkstra, ShortestPathAlgorithm};
use crate::geo::GeoPoint;
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use log::debug;
use num_traits::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;

/// How bulk edge insertion treats edges that cannot be added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// Skip edges whose endpoints are missing
    #[default]
    Lenient,
    /// Stop at the first invalid edge and report it
    Strict,
}

/// A route found between two vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route<W> {
    /// Vertex names from source to destination, both included
    pub vertices: Vec<String>,
    /// Sum of the edge weights along the route
    pub distance: W,
}

#[derive(Debug, Clone)]
struct Vertex<L, W> {
    name: String,
    location: L,
    /// Incident edges: [(neighbor_index, weight)]
    edges: Vec<(usize, W)>,
}

/// An undirected graph of named vertices using adjacency lists
///
/// Every edge is stored in the adjacency lists of both endpoints. Vertex
/// indices are assigned densely in insertion order and never change.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<L, W = f64>
where
    W: Float + Debug + Copy,
{
    /// Vertices in insertion order
    vertices: Vec<Vertex<L, W>>,

    /// Vertex name -> index into `vertices`
    indices: HashMap<String, usize>,
}

impl<L, W> UndirectedGraph<L, W>
where
    L: Debug,
    W: Float + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        UndirectedGraph {
            vertices: Vec::new(),
            indices: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        UndirectedGraph {
            vertices: Vec::with_capacity(vertices),
            indices: HashMap::with_capacity(vertices),
        }
    }

    /// Returns the location payload stored with a vertex
    pub fn location(&self, name: &str) -> Option<&L> {
        self.indices.get(name).map(|&idx| &self.vertices[idx].location)
    }

    /// Iterates over vertex names in insertion order
    pub fn vertex_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.iter().map(|v| v.name.as_str())
    }

    /// Iterates over every edge once as `(a, b, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, W)> + '_ {
        self.vertices.iter().enumerate().flat_map(move |(idx, vertex)| {
            vertex
                .edges
                .iter()
                .filter(move |(target, _)| *target >= idx)
                .map(move |(target, weight)| {
                    (vertex.name.as_str(), self.vertices[*target].name.as_str(), *weight)
                })
        })
    }

    /// Adds an edge, failing instead of silently skipping when it is invalid.
    ///
    /// Reports the first missing endpoint (source before destination), then
    /// rejects negative or NaN weights. The graph is unchanged on error.
    pub fn try_add_edge(&mut self, source: &str, destination: &str, weight: W) -> Result<()> {
        for name in [source, destination] {
            if !self.indices.contains_key(name) {
                return Err(Error::EndpointNotFound(name.to_string()));
            }
        }
        if weight.is_nan() || weight < W::zero() {
            return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }
        self.add_edge(source, destination, weight);
        Ok(())
    }

    /// Adds a batch of edges and returns how many were inserted.
    ///
    /// Under `EdgePolicy::Strict` the first invalid edge aborts the batch;
    /// edges inserted before it are kept.
    pub fn add_edges<I, S>(&mut self, edges: I, policy: EdgePolicy) -> Result<usize>
    where
        I: IntoIterator<Item = (S, S, W)>,
        S: AsRef<str>,
    {
        let mut inserted = 0;
        for (source, destination, weight) in edges {
            match policy {
                EdgePolicy::Lenient => {
                    if self.add_edge(source.as_ref(), destination.as_ref(), weight) {
                        inserted += 1;
                    }
                }
                EdgePolicy::Strict => {
                    self.try_add_edge(source.as_ref(), destination.as_ref(), weight)?;
                    inserted += 1;
                }
            }
        }
        Ok(inserted)
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.vertices
            .iter()
            .flat_map(|v| v.edges.iter())
            .all(|(_, weight)| *weight >= W::zero())
    }

    /// Sums the edge weights along consecutive vertices of `path`.
    /// Returns `None` for an empty path or when a hop is not an edge.
    pub fn path_weight<S: AsRef<str>>(&self, path: &[S]) -> Option<W> {
        let first = path.first()?;
        if !self.has_vertex(first.as_ref()) {
            return None;
        }
        path.windows(2).try_fold(W::zero(), |total, hop| {
            self.edge_weight(hop[0].as_ref(), hop[1].as_ref())
                .map(|weight| total + weight)
        })
    }

    fn upsert_edge(edges: &mut Vec<(usize, W)>, target: usize, weight: W) {
        match edges.iter_mut().find(|(t, _)| *t == target) {
            Some(edge) => edge.1 = weight,
            None => edges.push((target, weight)),
        }
    }
}

// Routing
impl<L, W> UndirectedGraph<L, W>
where
    L: Debug,
    W: Float + Debug + Copy,
{
    /// Finds the minimum-weight route between two named vertices.
    ///
    /// Returns `None` when either vertex is missing or the destination is
    /// unreachable. A query from a vertex to itself yields a one-vertex route.
    pub fn route(&self, source: &str, destination: &str) -> Option<Route<W>> {
        let (from, to) = match (self.index_of(source), self.index_of(destination)) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                debug!("route {} -> {}: unknown endpoint", source, destination);
                return None;
            }
        };

        let result = Dijkstra::new().find_path(self, from, to)?;
        Some(Route {
            vertices: result
                .vertices
                .into_iter()
                .map(|idx| self.vertices[idx].name.clone())
                .collect(),
            distance: result.distance,
        })
    }

    /// Returns the vertex names along the shortest route, empty if there is none
    pub fn shortest_path(&self, source: &str, destination: &str) -> Vec<String> {
        self.route(source, destination)
            .map(|route| route.vertices)
            .unwrap_or_default()
    }

    /// Answers many independent route queries concurrently.
    /// Results are returned in the order of `pairs`.
    pub fn routes_parallel<S>(&self, pairs: &[(S, S)]) -> Vec<Option<Route<W>>>
    where
        S: AsRef<str> + Sync,
        L: Sync,
        W: Send + Sync,
    {
        pairs
            .par_iter()
            .map(|(source, destination)| self.route(source.as_ref(), destination.as_ref()))
            .collect()
    }
}

impl UndirectedGraph<GeoPoint, f64> {
    /// Connects two vertices with an edge weighted by their great-circle
    /// distance in kilometres. Returns false if either vertex is missing.
    pub fn connect_by_distance(&mut self, a: &str, b: &str) -> bool {
        let distance = match (self.location(a), self.location(b)) {
            (Some(from), Some(to)) => from.distance_km(to),
            _ => return false,
        };
        self.add_edge(a, b, distance)
    }
}

impl<L, W> Default for UndirectedGraph<L, W>
where
    L: Debug,
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, W> Graph<W> for UndirectedGraph<L, W>
where
    L: Debug,
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        // Each edge sits in both endpoint lists; count it from its lower index only
        self.vertices
            .iter()
            .enumerate()
            .map(|(idx, v)| v.edges.iter().filter(|(target, _)| *target >= idx).count())
            .sum()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    fn name_of(&self, vertex: usize) -> Option<&str> {
        self.vertices.get(vertex).map(|v| v.name.as_str())
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(v) = self.vertices.get(vertex) {
            Box::new(v.edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<L, W> MutableGraph<L, W> for UndirectedGraph<L, W>
where
    L: Debug,
    W: Float + Debug + Copy,
{
    fn add_vertex(&mut self, name: &str, location: L) -> bool {
        if self.indices.contains_key(name) {
            return false;
        }

        let idx = self.vertices.len();
        self.vertices.push(Vertex {
            name: name.to_string(),
            location,
            edges: Vec::new(),
        });
        self.indices.insert(name.to_string(), idx);
        true
    }

    fn add_edge(&mut self, source: &str, destination: &str, weight: W) -> bool {
        let (from, to) = match (self.index_of(source), self.index_of(destination)) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                debug!("ignoring edge {} - {}: endpoint missing", source, destination);
                return false;
            }
        };

        Self::upsert_edge(&mut self.vertices[from].edges, to, weight);
        Self::upsert_edge(&mut self.vertices[to].edges, from, weight);
        true
    }
}
