//! `wgraph distances` command
use wgraph_core::error::Result;
use wgraph_core::graph::{DijkstraSearch, DistanceEntry, Search};

use super::graph_input::LabelledGraph;
use super::human;
use crate::cli::{GraphArgs, OutputFormat};

/// Execute the distances command
pub fn execute(format: OutputFormat, from: &str, args: &GraphArgs) -> Result<()> {
    let labelled = LabelledGraph::from_args(args)?;
    let source = labelled.resolve(from)?;

    let paths = DijkstraSearch::new(&labelled.graph).traverse(source)?;
    let entries = DistanceEntry::collect(&labelled.graph, &paths)?;

    crate::output_by_format!(format,
        json => {
            let output = serde_json::json!({
                "from": from,
                "distances": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => { human::output_distances_human(&entries); }
    );
    Ok(())
}
