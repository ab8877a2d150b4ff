//! Turning a ranking into a diagnosis
//!
//! The top-ranked case supplies the suggested resolution. Its similarity is
//! banded into a confidence level using the store's thresholds.

use std::fmt;

use serde::Serialize;

use crate::config::DiagnosisConfig;
use crate::similarity::ScoredCase;
use crate::store::DomainData;

/// How much to trust the top match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// At or above the confirmed threshold
    Confirmed,
    /// At or above the probable threshold
    Probable,
    /// Below both thresholds; the observation resembles no known case
    Unrecognized,
}

impl Confidence {
    pub fn from_similarity(similarity: f64, config: &DiagnosisConfig) -> Self {
        if similarity >= config.confirmed_threshold {
            Confidence::Confirmed
        } else if similarity >= config.probable_threshold {
            Confidence::Probable
        } else {
            Confidence::Unrecognized
        }
    }

    /// Headline shown to a person reading the result
    pub fn headline(self) -> &'static str {
        match self {
            Confidence::Confirmed => "Resolution found",
            Confidence::Probable => "Possible resolution",
            Confidence::Unrecognized => "Unrecognized case",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Confirmed => write!(f, "confirmed"),
            Confidence::Probable => write!(f, "probable"),
            Confidence::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// The suggested resolution for an observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    /// Closest stored case
    pub case_id: String,
    /// Similarity of that case (0.0 to 100.0)
    pub similarity: f64,
    pub resolution_id: String,
    /// Display text of the resolution; `None` when the resolution table
    /// has no such id
    pub resolution_text: Option<String>,
    pub confidence: Confidence,
}

impl Diagnosis {
    /// Diagnose from an existing ranking. `None` when the ranking is empty,
    /// which callers must report as "no data" rather than a weak match.
    pub fn from_ranking(
        ranked: &[ScoredCase],
        domain: &DomainData,
        config: &DiagnosisConfig,
    ) -> Option<Self> {
        let top = ranked.first()?;
        let resolution_text = domain
            .resolution_text(&top.resolution_id)
            .map(str::to_string);

        if resolution_text.is_none() {
            tracing::warn!(
                domain = %domain.name,
                resolution_id = %top.resolution_id,
                "top case points at an unknown resolution"
            );
        }

        Some(Diagnosis {
            case_id: top.case_id.clone(),
            similarity: top.similarity,
            resolution_id: top.resolution_id.clone(),
            resolution_text,
            confidence: Confidence::from_similarity(top.similarity, config),
        })
    }
}

/// Rank `observed` against the domain and diagnose the top match
pub fn diagnose<S: AsRef<str>>(
    observed: &[S],
    domain: &DomainData,
    config: &DiagnosisConfig,
) -> (Vec<ScoredCase>, Option<Diagnosis>) {
    let ranked = domain.rank(observed);
    let diagnosis = Diagnosis::from_ranking(&ranked, domain, config);
    (ranked, diagnosis)
}
