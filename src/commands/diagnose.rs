//! `casebook diagnose` command - retrieve the closest case
//!
//! Loads the domain fresh, ranks every stored case against the observed
//! symptoms, and reports the top match with its confidence band.

use crate::cli::{Cli, DiagnoseArgs};
use crate::commands::format::{print_records_header, print_warning};
use crate::output_by_format_result;
use casebook_core::diagnosis::{diagnose, Diagnosis};
use casebook_core::error::{CasebookError, Result};
use casebook_core::format::format_similarity;
use casebook_core::history::{append_entry, HistoryEntry};
use casebook_core::records::{format_diagnosis, format_scored_case, format_warning};
use casebook_core::similarity::ScoredCase;
use casebook_core::store::{DomainData, Store};

/// Execute the diagnose command
pub fn execute(cli: &Cli, store: &Store, args: &DiagnoseArgs) -> Result<()> {
    let data = store.load_domain(&args.domain)?;

    let unknown = data.unknown_symptoms(&args.symptoms);
    if !unknown.is_empty() {
        tracing::warn!(domain = %args.domain, unknown = ?unknown, "observed ids missing from symptom table");
    }

    let (ranked, diagnosis) = diagnose(&args.symptoms, &data, &store.config().diagnosis);
    let Some(diagnosis) = diagnosis else {
        return Err(CasebookError::EmptyCaseBase {
            domain: args.domain.clone(),
        });
    };

    if args.log || store.config().history.auto_log {
        let entry = HistoryEntry::new(&args.domain, &args.symptoms, &diagnosis);
        if let Err(e) = append_entry(&store.history_path(), &entry) {
            tracing::warn!(error = %e, "failed to write history entry");
            print_warning(cli.quiet, &format!("diagnosis not logged: {}", e));
        }
    }

    let shown = &ranked[..ranked.len().min(args.top)];
    let unknown_ids: Vec<String> = unknown.iter().map(|s| s.to_string()).collect();

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "domain": args.domain,
                "observed": args.symptoms,
                "unknown_symptoms": unknown_ids,
                "diagnosis": diagnosis,
                "ranked": shown,
                "cases": ranked.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            if !unknown_ids.is_empty() {
                print_warning(
                    cli.quiet,
                    &format!("unknown symptom ids (weight 0): {}", unknown_ids.join(", ")),
                );
            }
            print_human(&data, &diagnosis, shown, cli.quiet);
        },
        records => {
            print_records_header(
                store.root(),
                "diagnose",
                &format!(
                    "domain={} observed={} cases={}",
                    args.domain,
                    args.symptoms.join(","),
                    ranked.len()
                ),
            );
            println!("{}", format_diagnosis(&diagnosis));
            for (i, scored) in shown.iter().enumerate() {
                println!("{}", format_scored_case(i + 1, scored));
            }
            for id in &unknown_ids {
                println!("{}", format_warning(&format!("unknown symptom {}", id)));
            }
            if diagnosis.resolution_text.is_none() {
                println!(
                    "{}",
                    format_warning(&format!("resolution {} has no entry", diagnosis.resolution_id))
                );
            }
        }
    )
}

fn print_human(data: &DomainData, diagnosis: &Diagnosis, shown: &[ScoredCase], quiet: bool) {
    println!(
        "{} ({}, {})",
        diagnosis.confidence.headline(),
        diagnosis.confidence,
        format_similarity(diagnosis.similarity)
    );
    println!("  Case:       {}", diagnosis.case_id);
    match &diagnosis.resolution_text {
        Some(text) => println!("  Resolution: {}  {}", diagnosis.resolution_id, text),
        None => println!(
            "  Resolution: {}  (not listed in the {} resolutions table)",
            diagnosis.resolution_id,
            data.display_name()
        ),
    }

    if quiet {
        return;
    }

    println!();
    println!("Top matches:");
    for (i, scored) in shown.iter().enumerate() {
        println!(
            "  {}. {:<8} {:>6}  {:<8} [{}]",
            i + 1,
            scored.case_id,
            format_similarity(scored.similarity),
            scored.resolution_id,
            scored.signature.join(",")
        );
    }
}
