//! Main CLI commands enum

use clap::Subcommand;

use crate::cli::args::GraphArgs;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the six-vertex sample graph and show BFS and a shortest path
    Demo,

    /// Breadth-first traversal order from a vertex
    Bfs {
        /// Start vertex
        #[arg(long)]
        from: String,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Shortest weighted path between two vertices
    Path {
        /// Start vertex
        #[arg(long)]
        from: String,

        /// Target vertex
        #[arg(long)]
        to: String,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Shortest distance and predecessor for every vertex
    Distances {
        /// Start vertex
        #[arg(long)]
        from: String,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// List the edges of a graph
    Edges {
        #[command(flatten)]
        graph: GraphArgs,
    },
}
