//! Classifier boundary: the narrow inference contract the engine consumes
//!
//! The statistical classifier is a black box behind [`Classifier`]. Its
//! failures are caught at this boundary and surfaced as
//! [`EngineError::ClassifierUnavailable`], never propagated raw.

pub mod confidence;
pub mod model;
pub mod resolver;

use std::collections::BTreeMap;

use crate::core::{EngineError, Result};
use crate::scoring::FeatureVector;

pub use confidence::{aggregate_band_mass, aggregate_group_confidence, GroupConfidence};
pub use model::CentroidModel;
pub use resolver::{average_score, resolve_band, Resolution, ResolutionPolicy};

/// Capability interface over the external classifier.
///
/// Loaded once at process start and shared read-only across requests; no
/// request may mutate it.
pub trait Classifier: Send + Sync {
    /// The feature order the classifier was trained with, when it exposes
    /// one. Absence is a capability gap, not an error; the feature vector
    /// builder branches on it.
    fn feature_names(&self) -> Option<Vec<String>>;

    /// The classifier's own label vocabulary
    fn labels(&self) -> Vec<String>;

    /// Predict the label for an ordered feature vector
    fn predict(&self, features: &[f64]) -> anyhow::Result<String>;

    /// Per-label probabilities for an ordered feature vector. Probabilities
    /// need not sum to 1 across the subset used downstream.
    fn predict_proba(&self, features: &[f64]) -> anyhow::Result<BTreeMap<String, f64>>;
}

/// One inference pass: predicted label plus per-label probability mass.
/// Owned transiently per request, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierOutput {
    pub label: String,
    pub probabilities: BTreeMap<String, f64>,
}

/// Run both inference calls, converting any classifier failure into the
/// request-fatal [`EngineError::ClassifierUnavailable`].
pub fn run_inference(
    classifier: &dyn Classifier,
    features: &FeatureVector,
) -> Result<ClassifierOutput> {
    let label = classifier
        .predict(&features.values)
        .map_err(|e| EngineError::classifier(format!("predict failed: {e}")))?;
    let probabilities = classifier
        .predict_proba(&features.values)
        .map_err(|e| EngineError::classifier(format!("predict_proba failed: {e}")))?;
    Ok(ClassifierOutput {
        label,
        probabilities,
    })
}
