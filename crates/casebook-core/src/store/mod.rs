//! Store management for casebook
//!
//! The store is the directory holding the configuration, one table
//! directory per domain and the diagnosis history.
//! Default location: `.casebook/`

mod domain;
pub mod io;
pub mod paths;
mod retain;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::case::{Case, CaseBase, SymptomWeights, SIGNATURE_DELIMITER};
use crate::config::{validate_domain_name, DomainConfig, StoreConfig};
use crate::error::{CasebookError, Result};
use crate::id::next_case_id;
use crate::{bail_invalid, bail_usage, trace_time};

pub use domain::{DanglingReference, DomainData};
pub use io::{DroppedRow, Table};
pub use retain::CaseFileLock;

use paths::{CONFIG_FILE, DEFAULT_STORE_DIR, DOMAINS_DIR, HISTORY_FILE, VISIBLE_STORE_DIR};

/// Options for store initialization
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Use visible store directory (`casebook/` instead of `.casebook/`)
    pub visible: bool,
}

/// The casebook store
#[derive(Debug)]
pub struct Store {
    /// Root path of the store
    root: PathBuf,
    /// Store configuration
    config: StoreConfig,
}

impl Store {
    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let store_path = paths::discover_store(root)?;
        Self::open(&store_path)
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(CasebookError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            StoreConfig::default()
        };

        Ok(Store {
            root: path.to_path_buf(),
            config,
        })
    }

    /// Initialize a new store under the given project root.
    pub fn init(project_root: &Path, options: InitOptions) -> Result<Self> {
        let store_name = if options.visible {
            VISIBLE_STORE_DIR
        } else {
            DEFAULT_STORE_DIR
        };

        Self::init_at(&project_root.join(store_name))
    }

    /// Initialize a store at an explicit store root path.
    ///
    /// Idempotent: an existing config is kept as is.
    pub fn init_at(store_root: &Path) -> Result<Self> {
        fs::create_dir_all(store_root.join(DOMAINS_DIR))?;

        let config_path = store_root.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            let config = StoreConfig::default();
            config.save(&config_path)?;
            config
        };

        Ok(Store {
            root: store_root.to_path_buf(),
            config,
        })
    }

    /// Get the store root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Get the config
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get the history log path
    pub fn history_path(&self) -> PathBuf {
        self.root.join(HISTORY_FILE)
    }

    /// Directory holding a domain's tables
    pub fn domain_dir(&self, domain: &str) -> PathBuf {
        self.root.join(DOMAINS_DIR).join(domain)
    }

    /// Path of one of a domain's tables
    pub fn table_path(&self, domain: &str, table: Table) -> PathBuf {
        self.domain_dir(domain).join(table.file_name())
    }

    /// Register a domain, create its directory and header-only tables, and
    /// persist the config. Existing table files are left untouched.
    pub fn add_domain(&mut self, name: &str, domain: DomainConfig) -> Result<()> {
        validate_domain_name(name)?;
        let mut config = self.config.clone();
        config.add_domain(name, domain)?;

        fs::create_dir_all(self.domain_dir(name))?;
        for table in [Table::Symptoms, Table::Resolutions, Table::Cases] {
            io::ensure_table(&self.table_path(name, table), table)?;
        }

        config.save(&self.config_path())?;
        self.config = config;
        tracing::info!(domain = name, "domain added");
        Ok(())
    }

    /// Load all three tables of a domain.
    ///
    /// A missing table is a [`CasebookError::ResourceNotFound`]; malformed
    /// rows are dropped and listed in [`DomainData::dropped`].
    #[tracing::instrument(skip(self))]
    pub fn load_domain(&self, name: &str) -> Result<DomainData> {
        let start = Instant::now();
        let config = self.config.domain(name)?.clone();

        let (symptoms, mut dropped) = io::read_symptoms(io::open_table(
            &self.table_path(name, Table::Symptoms),
            name,
            Table::Symptoms,
        )?)?;
        let (resolutions, dropped_resolutions) = io::read_resolutions(io::open_table(
            &self.table_path(name, Table::Resolutions),
            name,
            Table::Resolutions,
        )?)?;
        let (cases, dropped_cases) = io::read_cases(io::open_table(
            &self.table_path(name, Table::Cases),
            name,
            Table::Cases,
        )?)?;
        dropped.extend(dropped_resolutions);
        dropped.extend(dropped_cases);

        let weights = SymptomWeights::from_symptoms(&symptoms);

        tracing::debug!(
            symptoms = symptoms.len(),
            resolutions = resolutions.len(),
            cases = cases.len(),
            dropped = dropped.len(),
            "domain loaded"
        );
        trace_time!(start, "load_domain");

        Ok(DomainData {
            name: name.to_string(),
            config,
            symptoms,
            resolutions,
            cases: CaseBase::new(cases),
            weights,
            dropped,
        })
    }

    /// Append a confirmed case to a domain and return its new id.
    ///
    /// The id continues from the last case of `case_base`, which should be
    /// the case base as loaded for this request. Two retains computed from
    /// the same snapshot mint the same id; the lock only keeps their writes
    /// from interleaving.
    #[tracing::instrument(skip(self, case_base), fields(cases = case_base.len()))]
    pub fn retain(
        &self,
        domain: &str,
        observed: &[String],
        resolution_id: &str,
        case_base: &CaseBase,
    ) -> Result<String> {
        let domain_config = self.config.domain(domain)?;

        if observed.is_empty() {
            bail_usage!("a retained case needs at least one symptom");
        }
        if let Some(bad) = observed
            .iter()
            .find(|id| id.trim().is_empty() || id.contains(SIGNATURE_DELIMITER))
        {
            bail_invalid!("symptom id", format!("{bad:?}"));
        }
        if resolution_id.trim().is_empty() {
            bail_invalid!("resolution id", "(empty)");
        }

        let new_id = next_case_id(
            case_base.last().map(|c| c.case_id.as_str()),
            &domain_config.id_prefix,
            &domain_config.fallback_suffix,
        );
        let case = Case::new(new_id.clone(), observed, resolution_id);

        retain::append_case(&self.table_path(domain, Table::Cases), &case)
            .map_err(|e| CasebookError::retain_failure(domain, e))?;

        tracing::info!(domain, case_id = %new_id, signature = %case.signature, "case retained");
        Ok(new_id)
    }
}
