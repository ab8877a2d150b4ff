use std::collections::HashSet;

use crate::case::SymptomWeights;

/// Sum of the weights of the known ids; unknown ids add nothing.
///
/// Duplicates are counted each time they appear.
pub fn weight_total<'s>(
    weights: &SymptomWeights,
    symptom_ids: impl IntoIterator<Item = &'s str>,
) -> u64 {
    symptom_ids
        .into_iter()
        .filter_map(|id| weights.get(id))
        .map(u64::from)
        .sum()
}

/// Weight of the signature ids that were also observed
pub fn match_weight(
    weights: &SymptomWeights,
    signature: &[String],
    observed: &HashSet<&str>,
) -> u64 {
    weight_total(
        weights,
        signature
            .iter()
            .map(String::as_str)
            .filter(|id| observed.contains(id)),
    )
}

/// `matched / ((case_total + user_total) / 2) * 100`, or 0 for a zero divisor
pub fn similarity_pct(matched: u64, case_total: u64, user_total: u64) -> f64 {
    let divisor = (case_total + user_total) as f64 / 2.0;
    if divisor > 0.0 {
        (matched as f64 / divisor) * 100.0
    } else {
        0.0
    }
}
