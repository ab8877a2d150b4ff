//! Diagnosis history log
//!
//! An append-only table next to the store config. Each diagnosis that asks
//! to be logged adds one row; rows are never rewritten.

use std::fs::{self, OpenOptions};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::case::{join_signature, split_signature};
use crate::diagnosis::Diagnosis;
use crate::error::{CasebookError, Result};

/// Column order of the history table
pub const HISTORY_COLUMNS: [&str; 5] = ["timestamp", "domain", "symptoms", "resolution", "score"];

/// One logged diagnosis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub domain: String,
    /// Observed symptom ids, in the order given
    pub symptoms: Vec<String>,
    /// Suggested resolution text, or its id when the text is not listed
    pub resolution: String,
    /// Similarity of the top match
    pub score: f64,
}

impl HistoryEntry {
    pub fn new(domain: &str, observed: &[String], diagnosis: &Diagnosis) -> Self {
        HistoryEntry {
            timestamp: Utc::now(),
            domain: domain.to_string(),
            symptoms: observed.to_vec(),
            resolution: diagnosis
                .resolution_text
                .clone()
                .unwrap_or_else(|| diagnosis.resolution_id.clone()),
            score: diagnosis.similarity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct HistoryRow {
    timestamp: String,
    domain: String,
    symptoms: String,
    resolution: String,
    score: f64,
}

impl From<&HistoryEntry> for HistoryRow {
    fn from(entry: &HistoryEntry) -> Self {
        HistoryRow {
            timestamp: entry.timestamp.to_rfc3339(),
            domain: entry.domain.clone(),
            symptoms: join_signature(&entry.symptoms),
            resolution: entry.resolution.clone(),
            score: entry.score,
        }
    }
}

impl TryFrom<HistoryRow> for HistoryEntry {
    type Error = CasebookError;

    fn try_from(row: HistoryRow) -> Result<Self> {
        let timestamp = DateTime::parse_from_rfc3339(&row.timestamp)
            .map_err(|e| CasebookError::invalid_value("timestamp", e))?
            .with_timezone(&Utc);
        Ok(HistoryEntry {
            timestamp,
            domain: row.domain,
            symptoms: split_signature(&row.symptoms),
            resolution: row.resolution,
            score: row.score,
        })
    }
}

/// Append one entry, writing the header first if the log is new or empty
pub fn append_entry(path: &Path, entry: &HistoryEntry) -> Result<()> {
    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CasebookError::io_operation("open", path.display(), e))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);
    if needs_header {
        writer.write_record(HISTORY_COLUMNS)?;
    }
    writer.serialize(HistoryRow::from(entry))?;
    writer.flush()?;

    tracing::debug!(path = %path.display(), domain = %entry.domain, "history entry appended");
    Ok(())
}

/// Read the log, newest last. A missing log is an empty history; rows that
/// cannot be parsed are skipped with a warning.
pub fn read_entries(path: &Path) -> Result<Vec<HistoryEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut entries = Vec::new();
    for (index, row) in reader.deserialize::<HistoryRow>().enumerate() {
        match row.map_err(CasebookError::from).and_then(HistoryEntry::try_from) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                // +2: header line plus 1-based numbering
                tracing::warn!(line = index + 2, error = %e, "skipping history row");
            }
        }
    }
    Ok(entries)
}

/// Keep entries for `domain` (all when `None`), newest first, at most `limit`
pub fn select_entries(
    entries: Vec<HistoryEntry>,
    domain: Option<&str>,
    limit: Option<usize>,
) -> Vec<HistoryEntry> {
    let mut selected: Vec<HistoryEntry> = entries
        .into_iter()
        .rev()
        .filter(|e| domain.is_none_or(|d| e.domain == d))
        .collect();
    if let Some(limit) = limit {
        selected.truncate(limit);
    }
    selected
}
