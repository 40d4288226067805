//! Shared argument structures

use clap::Args;

use super::parse::{parse_edge, EdgeSpec};

/// Graph described on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Register a vertex, even one without edges (can be specified multiple times)
    #[arg(long = "vertex", value_name = "NAME", action = clap::ArgAction::Append)]
    pub vertices: Vec<String>,

    /// Directed edge as SOURCE:DESTINATION:WEIGHT (can be specified multiple times)
    #[arg(
        long = "edge",
        value_name = "SRC:DST:WEIGHT",
        value_parser = parse_edge,
        action = clap::ArgAction::Append
    )]
    pub edges: Vec<EdgeSpec>,
}
