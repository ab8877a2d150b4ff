//! Writing retained cases back to a domain's case table
//!
//! The whole table is read, the new row appended in memory, and the result
//! written to a staging file that is renamed over the original. Writers
//! serialise on an advisory lock over a sibling lock file; readers never
//! take it. The OS drops the lock with its owning process, so a crashed
//! retain never leaves the domain locked.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::case::Case;
use crate::error::{CasebookError, Result};

use super::io::Table;
use super::paths::{with_suffix, LOCK_SUFFIX, STAGING_SUFFIX};

/// Exclusive claim on a case table, released on drop
///
/// The lock file itself is left in place between retains; only the lock
/// held on it matters.
#[derive(Debug)]
pub struct CaseFileLock {
    file: File,
    path: PathBuf,
}

impl CaseFileLock {
    /// Take the lock for `table_path`, failing if another writer holds it
    pub fn acquire(table_path: &Path) -> Result<Self> {
        let path = with_suffix(table_path, LOCK_SUFFIX);
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| CasebookError::io_operation("open lock", path.display(), e))?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(CaseFileLock { file, path }),
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                Err(CasebookError::StoreLocked { path })
            }
            Err(e) => Err(CasebookError::io_operation("lock", path.display(), e)),
        }
    }
}

impl Drop for CaseFileLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to release case lock");
        }
    }
}

/// Encode a case as one CSV line, quoting the signature when needed
fn encode_row(case: &Case) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record([&case.case_id, &case.signature, &case.resolution_id])?;
    writer
        .into_inner()
        .map_err(|e| CasebookError::Other(format!("failed to encode case row: {}", e)))
}

/// Append `case` to the table at `table_path`.
///
/// The table must already exist. On any failure the original file is left
/// as it was and the staging file is removed.
pub fn append_case(table_path: &Path, case: &Case) -> Result<()> {
    let _lock = CaseFileLock::acquire(table_path)?;

    let mut content = fs::read(table_path)
        .map_err(|e| CasebookError::io_operation("read", table_path.display(), e))?;

    if content.is_empty() {
        content.extend_from_slice(Table::Cases.columns().join(",").as_bytes());
        content.push(b'\n');
    } else if !content.ends_with(b"\n") {
        content.push(b'\n');
    }
    content.extend_from_slice(&encode_row(case)?);

    let staging = with_suffix(table_path, STAGING_SUFFIX);
    let written = fs::write(&staging, &content).and_then(|_| fs::rename(&staging, table_path));
    if let Err(e) = written {
        let _ = fs::remove_file(&staging);
        return Err(CasebookError::io_operation("write", table_path.display(), e));
    }

    Ok(())
}
