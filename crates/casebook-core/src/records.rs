//! Utilities for records output format
//!
//! Every record is one line starting with a type letter:
//! `H` header, `D` diagnosis, `R` ranked case, `Y` symptom, `S` resolution,
//! `E` evaluation entry, `L` history entry, `W` warning.

use std::path::Path;

use crate::case::{Resolution, Symptom};
use crate::diagnosis::Diagnosis;
use crate::evaluation::EvaluationEntry;
use crate::similarity::ScoredCase;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Convert an absolute path to a path relative to the current working directory
pub fn path_relative_to_cwd(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        path.strip_prefix(&cwd)
            .ok()
            .map(|p| {
                let s = p.display().to_string();
                if s.is_empty() {
                    ".".to_string()
                } else {
                    s
                }
            })
            .unwrap_or_else(|| path.display().to_string())
    } else {
        path.display().to_string()
    }
}

/// Header line opening every records output
pub fn format_header(store: &Path, mode: &str, extra: &str) -> String {
    let mut line = format!(
        "H casebook=1 records=1 store={} mode={}",
        path_relative_to_cwd(store),
        mode
    );
    if !extra.is_empty() {
        line.push(' ');
        line.push_str(extra);
    }
    line
}

/// `D` line for the top match
pub fn format_diagnosis(diagnosis: &Diagnosis) -> String {
    let text = diagnosis
        .resolution_text
        .as_deref()
        .map(|t| format!("\"{}\"", escape_quotes(t)))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "D case={} similarity={:.3} confidence={} resolution={} text={}",
        diagnosis.case_id,
        diagnosis.similarity,
        diagnosis.confidence,
        diagnosis.resolution_id,
        text
    )
}

/// `R` line for one ranked case; `rank` starts at 1
pub fn format_scored_case(rank: usize, scored: &ScoredCase) -> String {
    format!(
        "R {} case={} similarity={:.3} resolution={} signature={}",
        rank,
        scored.case_id,
        scored.similarity,
        scored.resolution_id,
        scored.signature.join(",")
    )
}

pub fn format_symptom(symptom: &Symptom) -> String {
    format!(
        "Y {} weight={} \"{}\"",
        symptom.symptom_id,
        symptom.weight,
        escape_quotes(&symptom.display_name)
    )
}

pub fn format_resolution(resolution: &Resolution) -> String {
    format!(
        "S {} \"{}\"",
        resolution.resolution_id,
        escape_quotes(&resolution.display_name)
    )
}

pub fn format_evaluation_entry(entry: &EvaluationEntry) -> String {
    format!(
        "E {} expected={} predicted={} matched={} similarity={:.3} correct={}",
        entry.case_id,
        entry.expected,
        entry.predicted,
        entry.matched_case_id,
        entry.similarity,
        entry.is_correct()
    )
}

/// `W` line carrying a free-form warning
pub fn format_warning(message: &str) -> String {
    format!("W \"{}\"", escape_quotes(message))
}
