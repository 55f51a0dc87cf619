pub mod generators;
pub mod traits;
pub mod undirected;

pub use traits::{Graph, MutableGraph};
pub use undirected::{EdgePolicy, Route, UndirectedGraph};
