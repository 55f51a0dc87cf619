use num_traits::Float;
use std::fmt::Debug;

use crate::graph::Graph;

/// A single source-to-destination path found by an algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Vertex indices from source to target, both included
    pub vertices: Vec<usize>,

    /// Total weight of the path
    pub distance: W,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute a minimum-weight path from `source` to `target`.
    ///
    /// Returns `None` if either index is out of range or the target cannot be
    /// reached. When several minimum paths exist any of them may be returned.
    fn find_path(&self, graph: &G, source: usize, target: usize) -> Option<PathResult<W>>;
}
