//! Configuration type definitions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Id prefix used when a domain does not configure one
pub const DEFAULT_ID_PREFIX: &str = "K";

/// Suffix appended to the prefix when the next id cannot be derived
pub const DEFAULT_FALLBACK_SUFFIX: &str = "99";

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Confidence band thresholds
    #[serde(default)]
    pub diagnosis: DiagnosisConfig,

    /// Diagnosis history log
    #[serde(default)]
    pub history: HistoryConfig,

    /// Registered diagnostic domains, keyed by domain name
    #[serde(default)]
    pub domains: BTreeMap<String, DomainConfig>,
}

/// Thresholds (percent) separating the confidence bands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisConfig {
    /// Minimum similarity for a confirmed match (default 80.0)
    #[serde(default = "default_confirmed_threshold")]
    pub confirmed_threshold: f64,

    /// Minimum similarity for a probable match (default 50.0)
    #[serde(default = "default_probable_threshold")]
    pub probable_threshold: f64,
}

/// History log behaviour
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Log every diagnosis without needing `--log`
    #[serde(default)]
    pub auto_log: bool,
}

/// Per-domain settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Human-readable name (e.g. "Chili Plant")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Prefix for minted case ids
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Suffix used when the next id cannot be derived from the last case
    #[serde(default = "default_fallback_suffix")]
    pub fallback_suffix: String,
}

impl DomainConfig {
    pub fn new(id_prefix: impl Into<String>) -> Self {
        DomainConfig {
            display_name: None,
            id_prefix: id_prefix.into(),
            fallback_suffix: default_fallback_suffix(),
        }
    }
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_confirmed_threshold() -> f64 {
    80.0
}

fn default_probable_threshold() -> f64 {
    50.0
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

fn default_fallback_suffix() -> String {
    DEFAULT_FALLBACK_SUFFIX.to_string()
}

impl Default for DiagnosisConfig {
    fn default() -> Self {
        DiagnosisConfig {
            confirmed_threshold: default_confirmed_threshold(),
            probable_threshold: default_probable_threshold(),
        }
    }
}

impl Default for DomainConfig {
    fn default() -> Self {
        DomainConfig::new(DEFAULT_ID_PREFIX)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            version: STORE_FORMAT_VERSION,
            diagnosis: DiagnosisConfig::default(),
            history: HistoryConfig::default(),
            domains: BTreeMap::new(),
        }
    }
}
