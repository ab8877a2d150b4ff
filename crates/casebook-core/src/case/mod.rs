//! Case base data model
//!
//! Symptoms and resolutions are static reference data for a domain. Cases
//! pair a symptom signature with the resolution that fixed it.

mod reference;

pub use reference::{Resolution, Symptom, SymptomWeights};

use serde::{Deserialize, Serialize};

/// Delimiter between symptom ids in a stored signature
pub const SIGNATURE_DELIMITER: char = ',';

/// A historical (signature, resolution) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// Unique case identifier within the case base (e.g. `K07`)
    pub case_id: String,
    /// Symptom ids joined by `,`, in the order they were recorded
    pub signature: String,
    /// Resolution that closed this case
    pub resolution_id: String,
}

impl Case {
    /// Build a case from an ordered list of symptom ids
    pub fn new(
        case_id: impl Into<String>,
        symptom_ids: &[String],
        resolution_id: impl Into<String>,
    ) -> Self {
        Case {
            case_id: case_id.into(),
            signature: join_signature(symptom_ids),
            resolution_id: resolution_id.into(),
        }
    }

    /// Symptom ids of the signature.
    ///
    /// The stored text is split on `,` verbatim; ids are not trimmed, so a
    /// stray space makes an id unknown rather than silently matching.
    pub fn signature_ids(&self) -> Vec<String> {
        split_signature(&self.signature)
    }
}

/// Split a textual signature into its symptom ids
pub fn split_signature(signature: &str) -> Vec<String> {
    signature
        .split(SIGNATURE_DELIMITER)
        .map(str::to_string)
        .collect()
}

/// Join symptom ids into the textual signature form
pub fn join_signature(symptom_ids: &[String]) -> String {
    symptom_ids.join(&SIGNATURE_DELIMITER.to_string())
}

/// The ordered cases of one domain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseBase {
    cases: Vec<Case>,
}

impl CaseBase {
    pub fn new(cases: Vec<Case>) -> Self {
        CaseBase { cases }
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Last case in load order
    pub fn last(&self) -> Option<&Case> {
        self.cases.last()
    }

    pub fn get(&self, case_id: &str) -> Option<&Case> {
        self.cases.iter().find(|c| c.case_id == case_id)
    }
}

impl From<Vec<Case>> for CaseBase {
    fn from(cases: Vec<Case>) -> Self {
        CaseBase::new(cases)
    }
}
