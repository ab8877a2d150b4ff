//! Shared output formatting helpers for commands

use std::path::Path;

use casebook_core::error::Result;
use casebook_core::records::format_header;
use serde_json::json;

/// Print a JSON status message with extra fields
pub fn print_json_status(
    status: &str,
    message: Option<&str>,
    extra_fields: &[(&str, serde_json::Value)],
) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        if let Some(msg) = message {
            obj.insert("message".to_string(), json!(msg));
        }
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print the `H` line opening records output
pub fn print_records_header(store: &Path, mode: &str, extra: &str) {
    println!("{}", format_header(store, mode, extra));
}

/// Print a warning to stderr unless the user asked for quiet output
pub fn print_warning(quiet: bool, message: &str) {
    if !quiet {
        eprintln!("warning: {}", message);
    }
}
