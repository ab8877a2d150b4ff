use clap::{Args, Subcommand};

use crate::cli::parse::parse_domain_name;

#[derive(Args, Debug)]
pub struct DomainSubcommand {
    #[command(subcommand)]
    pub command: DomainCommands,
}

/// Domain subcommands
#[derive(Subcommand, Debug)]
pub enum DomainCommands {
    /// Register a domain and create its empty tables
    Add {
        /// Domain name (letters, digits, '-' and '_')
        #[arg(value_parser = parse_domain_name)]
        name: String,

        /// Case id prefix, e.g. K or KC
        #[arg(long)]
        prefix: String,

        /// Name shown in human output
        #[arg(long)]
        display_name: Option<String>,

        /// Suffix used when the last case id has no digits
        #[arg(long)]
        fallback_suffix: Option<String>,
    },

    /// List configured domains
    List,
}
