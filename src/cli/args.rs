//! Command argument structures

use clap::Args;

use crate::cli::parse::{parse_domain_name, parse_positive};

/// Arguments for the init command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Use visible store directory (casebook/ instead of .casebook/)
    #[arg(long)]
    pub visible: bool,
}

/// Arguments for commands that only need a domain.
#[derive(Args, Debug)]
pub struct DomainArgs {
    /// Domain name
    #[arg(long, short, value_parser = parse_domain_name)]
    pub domain: String,
}

/// Arguments for the diagnose command.
#[derive(Args, Debug)]
pub struct DiagnoseArgs {
    /// Domain name
    #[arg(long, short, value_parser = parse_domain_name)]
    pub domain: String,

    /// Observed symptom ids
    #[arg(required = true)]
    pub symptoms: Vec<String>,

    /// Number of ranked cases to show
    #[arg(long, short = 'n', default_value = "5", value_parser = parse_positive)]
    pub top: usize,

    /// Append this diagnosis to the history log
    #[arg(long)]
    pub log: bool,
}

/// Arguments for the retain command.
#[derive(Args, Debug)]
pub struct RetainArgs {
    /// Domain name
    #[arg(long, short, value_parser = parse_domain_name)]
    pub domain: String,

    /// Confirmed resolution id
    #[arg(long, short)]
    pub resolution: String,

    /// Symptom ids observed for the case, in order
    #[arg(required = true)]
    pub symptoms: Vec<String>,
}

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Domain name
    #[arg(long, short, value_parser = parse_domain_name)]
    pub domain: String,

    /// Exit with a data error when problems are found
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the history command.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Only show entries for this domain
    #[arg(long, short, value_parser = parse_domain_name)]
    pub domain: Option<String>,

    /// Maximum number of entries, newest first
    #[arg(long, short = 'n', value_parser = parse_positive)]
    pub limit: Option<usize>,
}
