//! `casebook init` command - create a new store
//!
//! Idempotent: running it on an existing store keeps its config.

use std::path::Path;

use crate::cli::paths::resolve_store_path;
use crate::cli::Cli;
use crate::commands::format::{print_json_status, print_records_header};
use crate::output_by_format_result;
use casebook_core::error::Result;
use casebook_core::store::{InitOptions, Store};

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path, visible: bool) -> Result<()> {
    let options = InitOptions { visible };

    let store = if let Some(path) = cli.store.as_ref() {
        Store::init_at(&resolve_store_path(root, path))?
    } else {
        Store::init(root, options)?
    };

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "ok",
                Some("Store initialized"),
                &[("store", serde_json::json!(store.root().display().to_string()))],
            )
        },
        human => {
            if !cli.quiet {
                println!("Initialized casebook store at {}", store.root().display());
                println!();
                println!("Run `casebook domain add <name> --prefix <P>` to register a domain.");
            }
        },
        records => {
            print_records_header(store.root(), "init", "status=ok");
        }
    )
}
