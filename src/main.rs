//! Wgraph - weighted graph CLI
//!
//! Builds directed weighted graphs from command-line arguments and runs
//! breadth-first and Dijkstra searches over them.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use wgraph_core::config::Config;
use wgraph_core::error::{ExitCode as GraphExitCode, GraphError};
use wgraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is a global flag, but clap may fail parsing before we can
            // inspect `Cli.format`. If the user requested JSON output, emit a
            // structured error envelope.
            if argv_format_json {
                let graph_error = match err.kind() {
                    // Help and version are informational, not errors - let clap handle them
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        GraphError::UsageError(err.to_string())
                    }
                    _ => GraphError::Other(err.to_string()),
                };

                eprintln!("{}", graph_error.to_json());
                return ExitCode::from(graph_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    let config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let format = cli.format.unwrap_or_default();
            return report_error(&cli, format, &e);
        }
    };

    // Command-line flags win over the config file
    let format = cli.format.unwrap_or(config.output.format);
    let log_level = cli.log_level.as_deref().or(config.logging.level.as_deref());
    let log_json = cli.log_json || config.logging.json;

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, log_level, log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), %format, "parse_args");

    match commands::dispatch::run(&cli, format, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => report_error(&cli, format, &e),
    }
}

fn report_error(cli: &Cli, format: OutputFormat, e: &GraphError) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", e);
    }

    ExitCode::from(e.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
