//! Similarity engine for retrieving the closest stored cases
//!
//! Scores every case of a case base against a set of observed symptoms by
//! weighted overlap. The divisor is the mean of the case's and the
//! observation's total weight, so observed symptoms that a case does not
//! mention lower its score.

mod calculation;

use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;

use crate::case::{Case, SymptomWeights};
use crate::trace_time;

pub use calculation::{match_weight, similarity_pct, weight_total};

/// One stored case scored against an observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCase {
    /// Case ID
    pub case_id: String,
    /// Similarity percentage (0.0 to 100.0)
    pub similarity: f64,
    /// Resolution recorded for the case
    pub resolution_id: String,
    /// Signature symptom ids as split from the stored text
    pub signature: Vec<String>,
}

/// Similarity Engine
pub struct SimilarityEngine<'a> {
    weights: &'a SymptomWeights,
}

impl<'a> SimilarityEngine<'a> {
    /// Create a new Similarity Engine over a domain's symptom weights
    pub fn new(weights: &'a SymptomWeights) -> Self {
        SimilarityEngine { weights }
    }

    /// Score a single case against an already-deduplicated observation
    pub fn score_case(&self, observed: &HashSet<&str>, user_total: u64, case: &Case) -> ScoredCase {
        let signature = case.signature_ids();
        let case_total = weight_total(self.weights, signature.iter().map(String::as_str));
        let matched = match_weight(self.weights, &signature, observed);

        ScoredCase {
            case_id: case.case_id.clone(),
            similarity: similarity_pct(matched, case_total, user_total),
            resolution_id: case.resolution_id.clone(),
            signature,
        }
    }

    /// Score every case and rank by similarity, highest first.
    ///
    /// Returns exactly one entry per case. Equal scores keep case-base order.
    pub fn rank<S: AsRef<str>>(&self, observed: &[S], cases: &[Case]) -> Vec<ScoredCase> {
        let start = Instant::now();

        let observed: HashSet<&str> = observed.iter().map(|s| s.as_ref()).collect();
        let user_total = weight_total(self.weights, observed.iter().copied());

        let mut results: Vec<ScoredCase> = cases
            .iter()
            .map(|case| self.score_case(&observed, user_total, case))
            .collect();

        // sort_by is stable, which keeps ties in case-base order
        results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

        trace_time!(start, "rank_cases", cases = cases.len(), user_total = user_total);
        results
    }
}

/// Rank `cases` against `observed` using `weights`
pub fn score<S: AsRef<str>>(
    observed: &[S],
    cases: &[Case],
    weights: &SymptomWeights,
) -> Vec<ScoredCase> {
    SimilarityEngine::new(weights).rank(observed, cases)
}
