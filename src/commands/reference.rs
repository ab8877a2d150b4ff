//! `casebook symptoms` and `casebook resolutions` - list reference tables

use crate::cli::Cli;
use crate::commands::format::print_records_header;
use crate::output_by_format_result;
use casebook_core::error::Result;
use casebook_core::records::{format_resolution, format_symptom};
use casebook_core::store::Store;

pub fn execute_symptoms(cli: &Cli, store: &Store, domain: &str) -> Result<()> {
    let data = store.load_domain(domain)?;

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&data.symptoms)?);
            Ok(())
        },
        human => {
            if data.symptoms.is_empty() && !cli.quiet {
                println!("No symptoms defined for {}", data.display_name());
            }
            for symptom in &data.symptoms {
                println!("{:<8} w={:<3} {}", symptom.symptom_id, symptom.weight, symptom.display_name);
            }
        },
        records => {
            print_records_header(
                store.root(),
                "symptoms",
                &format!("domain={} count={}", domain, data.symptoms.len()),
            );
            for symptom in &data.symptoms {
                println!("{}", format_symptom(symptom));
            }
        }
    )
}

pub fn execute_resolutions(cli: &Cli, store: &Store, domain: &str) -> Result<()> {
    let data = store.load_domain(domain)?;

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&data.resolutions)?);
            Ok(())
        },
        human => {
            if data.resolutions.is_empty() && !cli.quiet {
                println!("No resolutions defined for {}", data.display_name());
            }
            for resolution in &data.resolutions {
                println!("{:<8} {}", resolution.resolution_id, resolution.display_name);
            }
        },
        records => {
            print_records_header(
                store.root(),
                "resolutions",
                &format!("domain={} count={}", domain, data.resolutions.len()),
            );
            for resolution in &data.resolutions {
                println!("{}", format_resolution(resolution));
            }
        }
    )
}
