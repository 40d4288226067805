//! CLI argument parsing for wgraph
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --config

pub mod args;
pub mod commands;
pub mod output;
pub mod parse;

use clap::Parser;
use std::path::PathBuf;

pub use args::GraphArgs;
pub use commands::Commands;
pub use output::OutputFormat;
use parse::parse_format;

/// Wgraph - build weighted graphs and search them
#[derive(Parser, Debug)]
#[command(name = "wgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (overrides the config file)
    #[arg(long, global = true, value_name = "human|json", value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, wgraph_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a TOML config file (default: $WGRAPH_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
