//! Delimited table reading and validation
//!
//! Each loader returns the rows it accepted together with the rows it
//! dropped. Dropped rows never abort a load.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::case::{Case, Resolution, Symptom};
use crate::error::{CasebookError, Result};

/// The three tables every domain carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Symptoms,
    Resolutions,
    Cases,
}

impl Table {
    /// Header row written for new tables, in column order
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Table::Symptoms => &["symptom_id", "display_name", "weight"],
            Table::Resolutions => &["resolution_id", "display_name"],
            Table::Cases => &["case_id", "signature", "resolution_id"],
        }
    }

    /// Columns a row cannot do without
    fn required(self) -> &'static [&'static str] {
        match self {
            Table::Symptoms => &["symptom_id", "weight"],
            Table::Resolutions => &["resolution_id"],
            Table::Cases => &["case_id", "resolution_id"],
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Table::Symptoms => super::paths::SYMPTOMS_FILE,
            Table::Resolutions => super::paths::RESOLUTIONS_FILE,
            Table::Cases => super::paths::CASES_FILE,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Symptoms => write!(f, "symptoms"),
            Table::Resolutions => write!(f, "resolutions"),
            Table::Cases => write!(f, "cases"),
        }
    }
}

/// A row rejected at load time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedRow {
    pub table: Table,
    /// 1-based line in the file (header is line 1)
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Deserialize)]
struct SymptomRow {
    symptom_id: Option<String>,
    display_name: Option<String>,
    weight: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResolutionRow {
    resolution_id: Option<String>,
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CaseRow {
    case_id: Option<String>,
    signature: Option<String>,
    resolution_id: Option<String>,
}

/// A present, non-blank field
fn present(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

/// Read every row of a table, handing each parsed row to `accept`.
///
/// `accept` returns `Err(reason)` to drop a row. Rows the CSV layer cannot
/// decode are dropped the same way.
fn read_table<R, T, F>(
    reader: impl Read,
    table: Table,
    mut accept: F,
) -> Result<(Vec<T>, Vec<DroppedRow>)>
where
    R: for<'de> Deserialize<'de>,
    F: FnMut(R) -> std::result::Result<T, String>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in table.required() {
        if !headers.iter().any(|h| h == *column) {
            return Err(CasebookError::InvalidStore {
                reason: format!("{table} table is missing the `{column}` column"),
            });
        }
    }

    let mut rows = Vec::new();
    let mut dropped = Vec::new();
    let mut record = csv::StringRecord::new();

    loop {
        let line = csv_reader.position().line();
        match csv_reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let line = record.position().map_or(line, |p| p.line());
                let parsed = record
                    .deserialize::<R>(Some(&headers))
                    .map_err(|e| e.to_string())
                    .and_then(&mut accept);
                match parsed {
                    Ok(row) => rows.push(row),
                    Err(reason) => dropped.push(DroppedRow {
                        table,
                        line,
                        reason,
                    }),
                }
            }
            Err(err) => {
                if let csv::ErrorKind::Io(_) = err.kind() {
                    return Err(err.into());
                }
                dropped.push(DroppedRow {
                    table,
                    line: err.position().map_or(line, |p| p.line()),
                    reason: err.to_string(),
                });
            }
        }
    }

    for row in &dropped {
        tracing::warn!(table = %row.table, line = row.line, reason = %row.reason, "dropped row");
    }

    Ok((rows, dropped))
}

pub fn read_symptoms(reader: impl Read) -> Result<(Vec<Symptom>, Vec<DroppedRow>)> {
    read_table(reader, Table::Symptoms, |row: SymptomRow| {
        let symptom_id = present(row.symptom_id).ok_or("missing symptom_id")?;
        let raw_weight = present(row.weight).ok_or("missing weight")?;
        let weight = raw_weight
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("weight is not a non-negative integer: {raw_weight}"))?;
        Ok(Symptom {
            display_name: row.display_name.unwrap_or_else(|| symptom_id.clone()),
            symptom_id,
            weight,
        })
    })
}

pub fn read_resolutions(reader: impl Read) -> Result<(Vec<Resolution>, Vec<DroppedRow>)> {
    read_table(reader, Table::Resolutions, |row: ResolutionRow| {
        let resolution_id = present(row.resolution_id).ok_or("missing resolution_id")?;
        Ok(Resolution {
            display_name: row.display_name.unwrap_or_else(|| resolution_id.clone()),
            resolution_id,
        })
    })
}

pub fn read_cases(reader: impl Read) -> Result<(Vec<Case>, Vec<DroppedRow>)> {
    read_table(reader, Table::Cases, |row: CaseRow| {
        let case_id = present(row.case_id).ok_or("missing case_id")?;
        let resolution_id = present(row.resolution_id).ok_or("missing resolution_id")?;
        Ok(Case {
            case_id,
            signature: row.signature.unwrap_or_default(),
            resolution_id,
        })
    })
}

/// Create a table containing only its header row, unless it already exists
pub fn ensure_table(path: &Path, table: Table) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.columns())?;
    writer.flush()?;
    Ok(())
}

/// Open a table for reading, mapping a missing file to its own error
pub fn open_table(path: &Path, domain: &str, table: Table) -> Result<fs::File> {
    fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CasebookError::ResourceNotFound {
                domain: domain.to_string(),
                table: table.to_string(),
                path: path.to_path_buf(),
            }
        } else {
            CasebookError::io_operation("open", path.display(), e)
        }
    })
}
