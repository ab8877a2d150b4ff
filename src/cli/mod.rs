//! CLI argument parsing for casebook
//!
//! Supports global flags: --root, --store, --format, --quiet, --verbose

pub mod args;
pub mod domain;
pub mod format;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CheckArgs, DiagnoseArgs, DomainArgs, HistoryArgs, InitArgs, RetainArgs};
pub use casebook_core::format::OutputFormat;
pub use domain::{DomainCommands, DomainSubcommand};
use parse::parse_output_format;

/// Casebook - case-based diagnosis CLI
#[derive(Parser, Debug)]
#[command(name = "casebook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store root path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter directive (e.g. debug, casebook_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level casebook commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new casebook store
    Init(InitArgs),

    /// Manage diagnosis domains
    Domain(DomainSubcommand),

    /// List the symptoms of a domain
    Symptoms(DomainArgs),

    /// List the resolutions of a domain
    Resolutions(DomainArgs),

    /// Rank stored cases against observed symptoms and suggest a resolution
    Diagnose(DiagnoseArgs),

    /// Store a confirmed case in a domain's case base
    Retain(RetainArgs),

    /// Replay every stored case against the case base and report accuracy
    Evaluate(DomainArgs),

    /// Report dropped rows and dangling references in a domain
    Check(CheckArgs),

    /// List logged diagnoses
    History(HistoryArgs),
}
