//! `casebook evaluate` command - replay the case base against itself

use crate::cli::Cli;
use crate::commands::format::print_records_header;
use crate::output_by_format_result;
use casebook_core::error::Result;
use casebook_core::evaluation::evaluate;
use casebook_core::format::format_similarity;
use casebook_core::records::format_evaluation_entry;
use casebook_core::store::Store;

/// Execute the evaluate command
pub fn execute(cli: &Cli, store: &Store, domain: &str) -> Result<()> {
    let data = store.load_domain(domain)?;
    let report = evaluate(&data.cases, &data.weights);
    let accuracy = report.accuracy();

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "domain": domain,
                "total": report.total(),
                "correct": report.correct(),
                "accuracy": accuracy,
                "entries": report.entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            if !cli.quiet {
                for entry in report.entries.iter().filter(|e| !e.is_correct()) {
                    println!(
                        "MISS {:<8} expected {:<8} got {:<8} from {} ({})",
                        entry.case_id,
                        entry.expected,
                        entry.predicted,
                        entry.matched_case_id,
                        format_similarity(entry.similarity)
                    );
                }
            }
            match accuracy {
                Some(pct) => println!(
                    "Accuracy: {}/{} cases ({})",
                    report.correct(),
                    report.total(),
                    format_similarity(pct)
                ),
                None => println!("Accuracy: n/a (no cases in {})", data.display_name()),
            }
        },
        records => {
            let accuracy_field = accuracy
                .map(|pct| format!("{:.3}", pct))
                .unwrap_or_else(|| "-".to_string());
            print_records_header(
                store.root(),
                "evaluate",
                &format!(
                    "domain={} total={} correct={} accuracy={}",
                    domain,
                    report.total(),
                    report.correct(),
                    accuracy_field
                ),
            );
            for entry in &report.entries {
                println!("{}", format_evaluation_entry(entry));
            }
        }
    )
}
