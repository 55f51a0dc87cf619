pub mod dijkstra;
pub mod traits;

pub use dijkstra::Dijkstra;
pub use traits::{PathResult, ShortestPathAlgorithm};
