//! Shoprec - product recommendation CLI
//!
//! Recommends catalog products by description similarity, by a user's
//! category affinities, or by a blend of both, and records user actions.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use shoprec_core::error::ShoprecError;
use shoprec_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Parsing failed before `Cli.format` exists, so check argv for a JSON request
        Err(err) if json_requested() && !is_informational(err.kind()) => {
            return report(&ShoprecError::UsageError(err.to_string()), true, false);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, cli.format == OutputFormat::Json, cli.quiet),
    }
}

/// Print an error in the requested format and map it to the process exit code
fn report(error: &ShoprecError, json: bool, quiet: bool) -> ExitCode {
    if json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }
    ExitCode::from(error.exit_code() as u8)
}

fn is_informational(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

fn json_requested() -> bool {
    let args: Vec<String> = std::env::args().skip(1).collect();
    args.iter().any(|a| a == "--format=json")
        || args.windows(2).any(|w| w[0] == "--format" && w[1] == "json")
}
