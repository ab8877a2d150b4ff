//! A domain's tables, loaded together

use std::collections::HashSet;

use serde::Serialize;

use crate::case::{Case, CaseBase, Resolution, Symptom, SymptomWeights};
use crate::config::DomainConfig;
use crate::similarity::{score, ScoredCase};

use super::io::{DroppedRow, Table};

/// Snapshot of one domain as read from disk.
///
/// Nothing here is cached across operations; reload after a retain to see
/// the new case.
#[derive(Debug, Clone)]
pub struct DomainData {
    pub name: String,
    pub config: DomainConfig,
    pub symptoms: Vec<Symptom>,
    pub resolutions: Vec<Resolution>,
    pub cases: CaseBase,
    pub weights: SymptomWeights,
    /// Rows rejected while loading, across all three tables
    pub dropped: Vec<DroppedRow>,
}

/// A reference from one table to an id another table does not define
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub case_id: String,
    pub table: Table,
    pub missing_id: String,
}

impl DomainData {
    /// Display name from config, falling back to the domain key
    pub fn display_name(&self) -> &str {
        self.config.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn symptom(&self, symptom_id: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.symptom_id == symptom_id)
    }

    pub fn resolution(&self, resolution_id: &str) -> Option<&Resolution> {
        self.resolutions
            .iter()
            .find(|r| r.resolution_id == resolution_id)
    }

    /// Display text for a resolution id, if the resolution table has it
    pub fn resolution_text(&self, resolution_id: &str) -> Option<&str> {
        self.resolution(resolution_id)
            .map(|r| r.display_name.as_str())
    }

    /// Rank this domain's cases against an observation
    pub fn rank<S: AsRef<str>>(&self, observed: &[S]) -> Vec<ScoredCase> {
        score(observed, self.cases.cases(), &self.weights)
    }

    /// Observed ids the symptom table does not define
    pub fn unknown_symptoms<'a, S: AsRef<str>>(&self, observed: &'a [S]) -> Vec<&'a str> {
        observed
            .iter()
            .map(|s| s.as_ref())
            .filter(|id| !self.weights.contains(id))
            .collect()
    }

    /// Signature ids and resolution ids that point nowhere.
    ///
    /// These are tolerated when scoring; this is for reporting only.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let resolution_ids: HashSet<&str> = self
            .resolutions
            .iter()
            .map(|r| r.resolution_id.as_str())
            .collect();

        let mut dangling = Vec::new();
        for case in self.cases.cases() {
            dangling.extend(self.unknown_signature_ids(case));
            if !resolution_ids.contains(case.resolution_id.as_str()) {
                dangling.push(DanglingReference {
                    case_id: case.case_id.clone(),
                    table: Table::Resolutions,
                    missing_id: case.resolution_id.clone(),
                });
            }
        }
        dangling
    }

    fn unknown_signature_ids(&self, case: &Case) -> Vec<DanglingReference> {
        case.signature_ids()
            .into_iter()
            .filter(|id| !self.weights.contains(id))
            .map(|missing_id| DanglingReference {
                case_id: case.case_id.clone(),
                table: Table::Symptoms,
                missing_id,
            })
            .collect()
    }
}
