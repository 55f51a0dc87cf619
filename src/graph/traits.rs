use num_traits::Float;
use std::fmt::Debug;

/// Trait representing a weighted undirected graph of named vertices
///
/// Vertices are addressed two ways: by their unique name at the public
/// surface, and by a dense index in `0..vertex_count()` inside algorithms.
pub trait Graph<W>: Debug
where
    W: Float + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, each undirected edge counted once
    fn edge_count(&self) -> usize;

    /// Resolves a vertex name to its index
    fn index_of(&self, name: &str) -> Option<usize>;

    /// Resolves a vertex index back to its name
    fn name_of(&self, vertex: usize) -> Option<&str>;

    /// Returns an iterator over the edges incident to a vertex as `(neighbor, weight)`
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if a vertex with this name exists
    fn has_vertex(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Returns true if there's an edge between the two named vertices
    fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Gets the weight of the edge between two named vertices if it exists
    fn edge_weight(&self, a: &str, b: &str) -> Option<W> {
        let from = self.index_of(a)?;
        let to = self.index_of(b)?;
        self.neighbors(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<L, W>: Graph<W>
where
    W: Float + Debug + Copy,
{
    /// Adds a vertex unless one with the same name exists.
    /// Returns true if the vertex was inserted.
    fn add_vertex(&mut self, name: &str, location: L) -> bool;

    /// Adds a symmetric edge between two existing vertices, overwriting any
    /// previous weight. Returns false and leaves the graph untouched when
    /// either endpoint is missing.
    fn add_edge(&mut self, source: &str, destination: &str, weight: W) -> bool;
}
