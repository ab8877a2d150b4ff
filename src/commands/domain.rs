//! `casebook domain` commands

use crate::cli::Cli;
use crate::commands::format::{print_json_status, print_records_header};
use crate::output_by_format_result;
use casebook_core::config::DomainConfig;
use casebook_core::error::Result;
use casebook_core::records::escape_quotes;
use casebook_core::store::{Store, Table};

/// Register a domain and create its tables
pub fn execute_add(cli: &Cli, store: &mut Store, name: &str, config: DomainConfig) -> Result<()> {
    let prefix = config.id_prefix.clone();
    store.add_domain(name, config)?;
    let cases_path = store.table_path(name, Table::Cases);

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "ok",
                Some("Domain added"),
                &[
                    ("domain", serde_json::json!(name)),
                    ("id_prefix", serde_json::json!(prefix)),
                    ("directory", serde_json::json!(store.domain_dir(name).display().to_string())),
                ],
            )
        },
        human => {
            if !cli.quiet {
                println!("Added domain {} (case ids {}NN)", name, prefix);
                println!("Fill in the tables under {}", store.domain_dir(name).display());
                println!("  cases: {}", cases_path.display());
            }
        },
        records => {
            print_records_header(
                store.root(),
                "domain.add",
                &format!("domain={} prefix={}", name, prefix),
            );
        }
    )
}

/// List configured domains
pub fn execute_list(cli: &Cli, store: &Store) -> Result<()> {
    let domains = &store.config().domains;

    output_by_format_result!(cli.format,
        json => {
            let items: Vec<_> = domains
                .iter()
                .map(|(name, config)| {
                    serde_json::json!({
                        "name": name,
                        "display_name": config.display_name,
                        "id_prefix": config.id_prefix,
                        "fallback_suffix": config.fallback_suffix,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
            Ok(())
        },
        human => {
            if domains.is_empty() {
                if !cli.quiet {
                    println!("No domains configured");
                }
            } else {
                for (name, config) in domains {
                    match &config.display_name {
                        Some(display) => println!("{} ({}) prefix={}", name, display, config.id_prefix),
                        None => println!("{} prefix={}", name, config.id_prefix),
                    }
                }
            }
        },
        records => {
            print_records_header(store.root(), "domain.list", &format!("domains={}", domains.len()));
            for (name, config) in domains {
                let display = config.display_name.as_deref().unwrap_or(name);
                println!(
                    "M {} prefix={} fallback={} \"{}\"",
                    name,
                    config.id_prefix,
                    config.fallback_suffix,
                    escape_quotes(display)
                );
            }
        }
    )
}
