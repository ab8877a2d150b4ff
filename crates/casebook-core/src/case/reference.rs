use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An observable, weighted piece of evidence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub symptom_id: String,
    pub display_name: String,
    pub weight: u32,
}

/// A recommended remedy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub resolution_id: String,
    pub display_name: String,
}

/// Lookup from symptom id to weight.
///
/// Ids absent from the table have no weight; callers treat them as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomWeights {
    weights: HashMap<String, u32>,
}

impl SymptomWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a weight. The first definition of an id wins when
    /// built from a symptom table, see [`SymptomWeights::from_symptoms`].
    pub fn insert(&mut self, symptom_id: impl Into<String>, weight: u32) {
        self.weights.insert(symptom_id.into(), weight);
    }

    /// Weight of a known symptom
    pub fn get(&self, symptom_id: &str) -> Option<u32> {
        self.weights.get(symptom_id).copied()
    }

    pub fn contains(&self, symptom_id: &str) -> bool {
        self.weights.contains_key(symptom_id)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Build weights from a symptom table; duplicate ids keep their first row
    pub fn from_symptoms(symptoms: &[Symptom]) -> Self {
        let mut weights = HashMap::with_capacity(symptoms.len());
        for symptom in symptoms {
            weights
                .entry(symptom.symptom_id.clone())
                .or_insert(symptom.weight);
        }
        SymptomWeights { weights }
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for SymptomWeights {
    fn from_iter<T: IntoIterator<Item = (K, u32)>>(iter: T) -> Self {
        SymptomWeights {
            weights: iter.into_iter().map(|(k, w)| (k.into(), w)).collect(),
        }
    }
}
