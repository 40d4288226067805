//! Weighted graph storage and search algorithms
//!
//! Provides the graph model and the algorithms that walk it:
//! - `WeightedGraph` / `Vertex`: arena-backed directed graph with `f64` weights
//! - BFS traversal for level-order visiting
//! - Dijkstra search for weighted shortest paths
//! - `Search` trait shared by both algorithms

pub mod algos;
pub mod traversal;
pub mod types;
pub mod vertex;
pub mod weighted;

pub use algos::{BreadthFirstSearch, DijkstraSearch, ShortestPaths};
pub use traversal::Search;
pub use types::{DistanceEntry, EdgeEntry, PathResult, TraversalResult};
pub use vertex::{Vertex, VertexId};
pub use weighted::{Edge, WeightedGraph};
