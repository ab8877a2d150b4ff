//! Self-evaluation of a case base
//!
//! Every stored case is replayed as an observation against the whole case
//! base (itself included). A case counts as correct when the top-ranked
//! match carries the same resolution.

use serde::Serialize;

use crate::case::{CaseBase, SymptomWeights};
use crate::similarity::SimilarityEngine;

/// Outcome for a single replayed case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationEntry {
    pub case_id: String,
    /// Resolution recorded for the case
    pub expected: String,
    /// Resolution of the top-ranked match
    pub predicted: String,
    /// Case the prediction came from
    pub matched_case_id: String,
    pub similarity: f64,
}

impl EvaluationEntry {
    pub fn is_correct(&self) -> bool {
        self.expected == self.predicted
    }
}

/// Replay results for a whole case base
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub entries: Vec<EvaluationEntry>,
}

impl EvaluationReport {
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn correct(&self) -> usize {
        self.entries.iter().filter(|e| e.is_correct()).count()
    }

    /// Share of correct predictions in percent, `None` for an empty case base
    pub fn accuracy(&self) -> Option<f64> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.correct() as f64 / self.total() as f64 * 100.0)
        }
    }
}

/// Replay every case of `cases` against the whole case base
pub fn evaluate(cases: &CaseBase, weights: &SymptomWeights) -> EvaluationReport {
    let engine = SimilarityEngine::new(weights);

    let entries = cases
        .cases()
        .iter()
        .filter_map(|case| {
            let observed = case.signature_ids();
            let ranked = engine.rank(&observed, cases.cases());
            // Never empty: the case itself is in the base
            ranked.into_iter().next().map(|top| EvaluationEntry {
                case_id: case.case_id.clone(),
                expected: case.resolution_id.clone(),
                predicted: top.resolution_id,
                matched_case_id: top.case_id,
                similarity: top.similarity,
            })
        })
        .collect();

    EvaluationReport { entries }
}
