//! `wgraph edges` command
use wgraph_core::error::Result;
use wgraph_core::graph::EdgeEntry;

use super::graph_input::LabelledGraph;
use super::human;
use crate::cli::{Cli, GraphArgs, OutputFormat};

/// Execute the edges command
pub fn execute(cli: &Cli, format: OutputFormat, args: &GraphArgs) -> Result<()> {
    let labelled = LabelledGraph::from_args(args)?;
    let entries = EdgeEntry::collect(&labelled.graph);

    crate::output_by_format!(format,
        json => { println!("{}", serde_json::to_string_pretty(&entries)?); },
        human => { human::output_edges_human(cli, &entries); }
    );
    Ok(())
}
