//! Store configuration for casebook
//!
//! Configuration is stored in `config.toml` at the store root.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{CasebookError, Result};

pub use types::{
    DiagnosisConfig, DomainConfig, HistoryConfig, StoreConfig, DEFAULT_FALLBACK_SUFFIX,
    DEFAULT_ID_PREFIX, STORE_FORMAT_VERSION,
};

impl StoreConfig {
    /// Look up a domain by name
    pub fn domain(&self, name: &str) -> Result<&DomainConfig> {
        self.domains
            .get(name)
            .ok_or_else(|| CasebookError::DomainNotFound {
                name: name.to_string(),
                configured: self.configured_domains(),
            })
    }

    /// Comma separated domain names, or `none`
    pub fn configured_domains(&self) -> String {
        if self.domains.is_empty() {
            "none".to_string()
        } else {
            self.domains.keys().cloned().collect::<Vec<_>>().join(", ")
        }
    }

    /// Register a new domain. Fails if the name is taken or unusable.
    pub fn add_domain(&mut self, name: &str, domain: DomainConfig) -> Result<()> {
        validate_domain_name(name)?;
        if domain.id_prefix.chars().any(|c| c.is_ascii_digit()) {
            bail_invalid!("id prefix (must not contain digits)", &domain.id_prefix);
        }
        if domain.fallback_suffix.trim().is_empty() {
            bail_invalid!("fallback suffix (must not be empty)", &domain.fallback_suffix);
        }
        if self.domains.contains_key(name) {
            return Err(CasebookError::already_exists("domain", name));
        }
        self.domains.insert(name.to_string(), domain);
        Ok(())
    }

    /// Validate threshold ordering and per-domain id settings
    pub fn validate(&self) -> Result<()> {
        if let Some((name, _)) = self
            .domains
            .iter()
            .find(|(_, d)| d.fallback_suffix.trim().is_empty())
        {
            return Err(CasebookError::InvalidStore {
                reason: format!("domain {} has an empty fallback_suffix", name),
            });
        }

        let d = &self.diagnosis;
        if !(0.0..=100.0).contains(&d.probable_threshold)
            || !(0.0..=100.0).contains(&d.confirmed_threshold)
            || d.probable_threshold > d.confirmed_threshold
        {
            return Err(CasebookError::InvalidStore {
                reason: format!(
                    "diagnosis thresholds must satisfy 0 <= probable ({}) <= confirmed ({}) <= 100",
                    d.probable_threshold, d.confirmed_threshold
                ),
            });
        }
        Ok(())
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;

        if config.version > STORE_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = STORE_FORMAT_VERSION,
                "store config is newer than this build"
            );
        }

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CasebookError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Domain names become directory names, so keep them to a safe alphabet
pub fn validate_domain_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        bail_invalid!("domain name (use letters, digits, '-' or '_')", name);
    }
    Ok(())
}
