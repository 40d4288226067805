//! Wgraph Core Library
//!
//! A generic directed weighted graph with breadth-first and Dijkstra
//! searches, plus the error, logging, and configuration plumbing shared with
//! the `wgraph` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
