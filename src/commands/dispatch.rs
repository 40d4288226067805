//! Command dispatch logic for wgraph
use std::time::Instant;

use wgraph_core::error::Result;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands;

pub fn run(cli: &Cli, format: OutputFormat, start: Instant) -> Result<()> {
    let result = match &cli.command {
        None => handle_no_command(),

        Some(Commands::Demo) => commands::demo::execute(cli, format),

        Some(Commands::Bfs { from, graph }) => commands::bfs::execute(cli, format, from, graph),

        Some(Commands::Path { from, to, graph }) => {
            commands::path::execute(cli, format, from, to, graph)
        }

        Some(Commands::Distances { from, graph }) => {
            commands::distances::execute(format, from, graph)
        }

        Some(Commands::Edges { graph }) => commands::edges::execute(cli, format, graph),
    };

    tracing::debug!(elapsed = ?start.elapsed(), ok = result.is_ok(), "dispatch");
    result
}

fn handle_no_command() -> Result<()> {
    // No subcommand - show help
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    cmd.print_help()?;
    println!();
    Ok(())
}
