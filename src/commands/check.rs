//! `casebook check` command - report data problems in a domain
//!
//! Lists rows dropped at load time and references to ids that the symptom
//! or resolution tables do not define. Neither stops diagnosis.

use crate::cli::Cli;
use crate::commands::format::print_records_header;
use crate::output_by_format_result;
use casebook_core::error::{CasebookError, Result};
use casebook_core::records::escape_quotes;
use casebook_core::store::Store;

/// Execute the check command
pub fn execute(cli: &Cli, store: &Store, domain: &str, strict: bool) -> Result<()> {
    let data = store.load_domain(domain)?;
    let dangling = data.dangling_references();
    let problems = data.dropped.len() + dangling.len();

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "domain": domain,
                "symptoms": data.symptoms.len(),
                "resolutions": data.resolutions.len(),
                "cases": data.cases.len(),
                "dropped_rows": data.dropped,
                "dangling_references": dangling,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), CasebookError>(())
        },
        human => {
            println!(
                "{}: {} symptoms, {} resolutions, {} cases",
                data.display_name(),
                data.symptoms.len(),
                data.resolutions.len(),
                data.cases.len()
            );
            for row in &data.dropped {
                println!("  dropped {} line {}: {}", row.table, row.line, row.reason);
            }
            for reference in &dangling {
                println!(
                    "  case {} references unknown {} id {}",
                    reference.case_id, reference.table, reference.missing_id
                );
            }
            if problems == 0 && !cli.quiet {
                println!("No problems found");
            }
        },
        records => {
            print_records_header(
                store.root(),
                "check",
                &format!(
                    "domain={} cases={} dropped={} dangling={}",
                    domain,
                    data.cases.len(),
                    data.dropped.len(),
                    dangling.len()
                ),
            );
            for row in &data.dropped {
                println!(
                    "X {} line={} \"{}\"",
                    row.table,
                    row.line,
                    escape_quotes(&row.reason)
                );
            }
            for reference in &dangling {
                println!(
                    "U {} table={} id={}",
                    reference.case_id, reference.table, reference.missing_id
                );
            }
        }
    )?;

    if strict && problems > 0 {
        return Err(CasebookError::InvalidStore {
            reason: format!("domain {} has {} data problem(s)", domain, problems),
        });
    }
    Ok(())
}
