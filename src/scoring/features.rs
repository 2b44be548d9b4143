//! Feature vector construction in the classifier's expected order

use std::collections::BTreeMap;

/// An ordered numeric vector paired with its feature names
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub names: Vec<String>,
    pub values: Vec<f64>,
}

impl FeatureVector {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Order normalized scores into the shape the classifier expects.
///
/// Dual-mode, branching on capability presence:
/// - When the classifier exposes its trained feature order, every expected
///   name is looked up in the student's scores, defaulting to 0.0 when
///   absent. Missing topics count as zero credit, not as an error.
/// - When it does not, the student's own topic names are sorted
///   lexicographically and used as-is, with no zero-filling.
///
/// The distinction is load-bearing: it decides whether a missing topic
/// silently scores zero or is simply omitted from the vector.
pub fn build_feature_vector(
    scores: &BTreeMap<String, f64>,
    expected_order: Option<Vec<String>>,
) -> FeatureVector {
    match expected_order {
        Some(names) => {
            let values = names
                .iter()
                .map(|name| scores.get(name).copied().unwrap_or(0.0))
                .collect();
            FeatureVector { names, values }
        }
        None => {
            // BTreeMap iterates in lexicographic key order already
            let names: Vec<String> = scores.keys().cloned().collect();
            let values = names.iter().map(|name| scores[name]).collect();
            FeatureVector { names, values }
        }
    }
}
