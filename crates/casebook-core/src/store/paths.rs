use crate::error::{CasebookError, Result};
use std::path::{Path, PathBuf};

/// Default store directory name (hidden)
pub const DEFAULT_STORE_DIR: &str = ".casebook";

/// Visible store directory name
pub const VISIBLE_STORE_DIR: &str = "casebook";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Per-domain table directories live under this subdirectory
pub const DOMAINS_DIR: &str = "domains";

/// Diagnosis history log
pub const HISTORY_FILE: &str = "history.csv";

/// Domain table filenames
pub const SYMPTOMS_FILE: &str = "symptoms.csv";
pub const RESOLUTIONS_FILE: &str = "resolutions.csv";
pub const CASES_FILE: &str = "cases.csv";

/// Suffix of the file held while a retain rewrites the case table
pub const LOCK_SUFFIX: &str = ".lock";

/// Suffix of the staging file renamed over the case table
pub const STAGING_SUFFIX: &str = ".tmp";

pub fn discover_store(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        let store_path = current.join(DEFAULT_STORE_DIR);
        if store_path.is_dir() {
            return Ok(store_path);
        }

        let visible_path = current.join(VISIBLE_STORE_DIR);
        if visible_path.is_dir() {
            return Ok(visible_path);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(CasebookError::StoreNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}

/// `path` with `suffix` appended to its file name
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}
