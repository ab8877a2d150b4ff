//! `casebook retain` command - store a confirmed case

use crate::cli::{Cli, RetainArgs};
use crate::commands::format::{print_json_status, print_records_header};
use crate::output_by_format_result;
use casebook_core::error::{CasebookError, Result};
use casebook_core::store::Store;

/// Execute the retain command
pub fn execute(cli: &Cli, store: &Store, args: &RetainArgs) -> Result<()> {
    let data = store.load_domain(&args.domain)?;

    if data.resolution(&args.resolution).is_none() {
        return Err(CasebookError::not_found(
            &format!("resolution in domain {}", args.domain),
            &args.resolution,
        ));
    }

    let unknown = data.unknown_symptoms(&args.symptoms);
    if !unknown.is_empty() {
        tracing::warn!(domain = %args.domain, unknown = ?unknown, "retaining ids missing from symptom table");
    }

    let case_id = store.retain(&args.domain, &args.symptoms, &args.resolution, &data.cases)?;
    let signature = args.symptoms.join(",");

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "ok",
                Some("Case retained"),
                &[
                    ("domain", serde_json::json!(args.domain)),
                    ("case_id", serde_json::json!(case_id)),
                    ("signature", serde_json::json!(args.symptoms)),
                    ("resolution_id", serde_json::json!(args.resolution)),
                ],
            )
        },
        human => {
            if cli.quiet {
                println!("{}", case_id);
            } else {
                println!(
                    "Retained case {} in {}: [{}] -> {}",
                    case_id, args.domain, signature, args.resolution
                );
            }
        },
        records => {
            print_records_header(
                store.root(),
                "retain",
                &format!(
                    "domain={} case={} signature={} resolution={}",
                    args.domain, case_id, signature, args.resolution
                ),
            );
        }
    )
}
