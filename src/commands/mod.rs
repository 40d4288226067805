//! Command implementations for wgraph

pub mod bfs;
pub mod demo;
pub mod dispatch;
pub mod distances;
pub mod edges;
pub mod graph_input;
pub mod human;
pub mod path;
