//! Error types and exit codes for casebook
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, failed retain)
//! - 2: Usage error (bad flags/args)
//! - 3: Data/store error (missing store, missing domain tables, empty case base)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during casebook operations
#[derive(Error, Debug)]
pub enum CasebookError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("unknown domain: {name} (configured: {configured})")]
    DomainNotFound { name: String, configured: String },

    #[error("domain {domain}: {table} table not found at {path:?}")]
    ResourceNotFound {
        domain: String,
        table: String,
        path: PathBuf,
    },

    #[error("domain {domain} has no usable cases")]
    EmptyCaseBase { domain: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("case base is locked by another writer ({path:?})")]
    StoreLocked { path: PathBuf },

    #[error("failed to retain case in domain {domain}: {reason}")]
    RetainFailure { domain: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl CasebookError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        CasebookError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CasebookError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        CasebookError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        CasebookError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Wrap any failure raised while writing a retained case.
    ///
    /// A held lock keeps its own variant so callers can tell "try again"
    /// apart from a broken store.
    pub fn retain_failure(domain: &str, error: CasebookError) -> Self {
        match error {
            CasebookError::StoreLocked { .. } | CasebookError::RetainFailure { .. } => error,
            other => CasebookError::RetainFailure {
                domain: domain.to_string(),
                reason: other.to_string(),
            },
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CasebookError::UnknownFormat(_)
            | CasebookError::DuplicateFormat
            | CasebookError::UsageError(_)
            | CasebookError::InvalidValue { .. } => ExitCode::Usage,

            CasebookError::StoreNotFound { .. }
            | CasebookError::InvalidStore { .. }
            | CasebookError::DomainNotFound { .. }
            | CasebookError::ResourceNotFound { .. }
            | CasebookError::EmptyCaseBase { .. }
            | CasebookError::AlreadyExists { .. }
            | CasebookError::NotFound { .. } => ExitCode::Data,

            CasebookError::StoreLocked { .. }
            | CasebookError::RetainFailure { .. }
            | CasebookError::Io(_)
            | CasebookError::Csv(_)
            | CasebookError::Json(_)
            | CasebookError::Toml(_)
            | CasebookError::FailedOperationWithTarget { .. }
            | CasebookError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            CasebookError::UnknownFormat(_) => "unknown_format",
            CasebookError::DuplicateFormat => "duplicate_format",
            CasebookError::UsageError(_) => "usage_error",
            CasebookError::InvalidValue { .. } => "invalid_value",
            CasebookError::StoreNotFound { .. } => "store_not_found",
            CasebookError::InvalidStore { .. } => "invalid_store",
            CasebookError::DomainNotFound { .. } => "domain_not_found",
            CasebookError::ResourceNotFound { .. } => "resource_not_found",
            CasebookError::EmptyCaseBase { .. } => "empty_case_base",
            CasebookError::AlreadyExists { .. } => "already_exists",
            CasebookError::NotFound { .. } => "not_found",
            CasebookError::StoreLocked { .. } => "store_locked",
            CasebookError::RetainFailure { .. } => "retain_failure",
            CasebookError::Io(_) => "io_error",
            CasebookError::Csv(_) => "csv_error",
            CasebookError::Json(_) => "json_error",
            CasebookError::Toml(_) => "toml_error",
            CasebookError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            CasebookError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for casebook operations
pub type Result<T> = std::result::Result<T, CasebookError>;
