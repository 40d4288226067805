//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first search in level order
//! - `dijkstra`: Weighted single-source shortest paths
//! - `shared`: Per-run bookkeeping used by both algorithms

pub mod bfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::BreadthFirstSearch;
pub use dijkstra::{DijkstraSearch, ShortestPaths};
