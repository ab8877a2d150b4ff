//! Casebook - case-based diagnosis CLI
//!
//! Matches observed symptoms against stored cases by weighted similarity,
//! suggests the resolution of the closest case, and retains confirmed cases.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use casebook_core::error::{CasebookError, ExitCode as CasebookExitCode};
use casebook_core::logging;
use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(CasebookExitCode::Success as u8),
        Err(e) => {
            match cli.format {
                OutputFormat::Json => eprintln!("{}", e.to_json()),
                _ if cli.quiet => {}
                _ => eprintln!("error: {}", e),
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Whether the raw arguments ask for JSON output
fn argv_requests_json() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().enumerate().any(|(i, arg)| {
        arg == "--format=json"
            || (arg == "--format" && args.get(i + 1).is_some_and(|v| v == "json"))
    })
}

/// Report an argument error. `--format json` is honoured even though parsing
/// never produced a `Cli`, so scripted callers always get an envelope.
fn report_parse_error(err: clap::Error) -> ExitCode {
    use clap::error::ErrorKind;

    let informational = matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
    if informational || !argv_requests_json() {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::ArgumentConflict => CasebookError::DuplicateFormat,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument => CasebookError::UsageError(err.to_string()),
        _ => CasebookError::Other(err.to_string()),
    };
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}
