//! `wgraph demo` command
//!
//! Builds the six-vertex sample graph, runs BFS from A and prints the
//! shortest path from A to F.
use wgraph_core::error::Result;
use wgraph_core::graph::{BreadthFirstSearch, DijkstraSearch, PathResult, Search, TraversalResult};

use super::graph_input::demo_graph;
use super::human;
use crate::cli::{Cli, OutputFormat};

/// Execute the demo command
pub fn execute(cli: &Cli, format: OutputFormat) -> Result<()> {
    let labelled = demo_graph()?;
    let a = labelled.resolve("A")?;
    let f = labelled.resolve("F")?;

    let order = BreadthFirstSearch::new(&labelled.graph).traverse(a)?;
    let traversal = TraversalResult::new(&labelled.graph, a, &order);

    let paths = DijkstraSearch::new(&labelled.graph).traverse(a)?;
    let path = PathResult::new(&labelled.graph, &paths, f)?;

    crate::output_by_format!(format,
        json => {
            let output = serde_json::json!({
                "bfs": traversal,
                "path": path,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            human::output_traversal_human(&traversal);
            human::output_path_human(cli, &path);
        }
    );
    Ok(())
}
