//! `wgraph bfs` command
use std::time::Instant;

use wgraph_core::error::Result;
use wgraph_core::graph::{BreadthFirstSearch, Search, TraversalResult};
use wgraph_core::trace_time;

use super::graph_input::LabelledGraph;
use super::human;
use crate::cli::{Cli, GraphArgs, OutputFormat};

/// Execute the bfs command
pub fn execute(cli: &Cli, format: OutputFormat, from: &str, args: &GraphArgs) -> Result<()> {
    let start = Instant::now();
    let labelled = LabelledGraph::from_args(args)?;
    let root = labelled.resolve(from)?;

    let order = BreadthFirstSearch::new(&labelled.graph).traverse(root)?;
    trace_time!(start, "bfs", visited = order.len());

    let result = TraversalResult::new(&labelled.graph, root, &order);
    crate::output_by_format!(format,
        json => { println!("{}", serde_json::to_string_pretty(&result)?); },
        human => {
            if cli.quiet {
                println!("{}", result.order.join(", "));
            } else {
                human::output_traversal_human(&result);
            }
        }
    );
    Ok(())
}
