//! `casebook history` command - list logged diagnoses

use crate::cli::Cli;
use crate::commands::format::print_records_header;
use crate::output_by_format_result;
use casebook_core::error::Result;
use casebook_core::format::format_similarity;
use casebook_core::history::{read_entries, select_entries};
use casebook_core::records::escape_quotes;
use casebook_core::store::Store;

/// Execute the history command
pub fn execute(cli: &Cli, store: &Store, domain: Option<&str>, limit: Option<usize>) -> Result<()> {
    if let Some(name) = domain {
        store.config().domain(name)?;
    }

    let entries = select_entries(read_entries(&store.history_path())?, domain, limit);

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            Ok(())
        },
        human => {
            if entries.is_empty() && !cli.quiet {
                println!("No diagnoses logged");
            }
            for entry in &entries {
                println!(
                    "{}  {:<10} {:>6}  [{}]  {}",
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    entry.domain,
                    format_similarity(entry.score),
                    entry.symptoms.join(","),
                    entry.resolution
                );
            }
        },
        records => {
            print_records_header(store.root(), "history", &format!("entries={}", entries.len()));
            for entry in &entries {
                println!(
                    "L {} domain={} score={:.3} symptoms={} resolution=\"{}\"",
                    entry.timestamp.to_rfc3339(),
                    entry.domain,
                    entry.score,
                    entry.symptoms.join(","),
                    escape_quotes(&entry.resolution)
                );
            }
        }
    )
}
