//! `wgraph path` command
use std::time::Instant;

use wgraph_core::error::Result;
use wgraph_core::graph::{DijkstraSearch, PathResult, Search};
use wgraph_core::trace_time;

use super::graph_input::LabelledGraph;
use super::human;
use crate::cli::{Cli, GraphArgs, OutputFormat};

/// Execute the path command
///
/// An unreachable target is reported, not treated as a failure.
pub fn execute(
    cli: &Cli,
    format: OutputFormat,
    from: &str,
    to: &str,
    args: &GraphArgs,
) -> Result<()> {
    let start = Instant::now();
    let labelled = LabelledGraph::from_args(args)?;
    let source = labelled.resolve(from)?;
    let target = labelled.resolve(to)?;

    let paths = DijkstraSearch::new(&labelled.graph).traverse(source)?;
    trace_time!(start, "dijkstra");

    let result = PathResult::new(&labelled.graph, &paths, target)?;
    tracing::debug!(found = result.found, path_length = result.path_length, "path");

    crate::output_by_format!(format,
        json => { println!("{}", serde_json::to_string_pretty(&result)?); },
        human => { human::output_path_human(cli, &result); }
    );
    Ok(())
}
