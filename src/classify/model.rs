//! Nearest-centroid classifier loaded from a JSON model artifact
//!
//! Stands in for the trained statistical model behind the [`Classifier`]
//! trait: one artifact is deserialized at process start and shared
//! read-only by every request. Training and artifact production happen
//! elsewhere.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classify::Classifier;
use crate::core::{EngineError, Result};

/// On-disk model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Label vocabulary, in training order. Ties in distance resolve to the
    /// earliest label here.
    pub labels: Vec<String>,
    /// Feature order the model was trained with. Optional: older artifacts
    /// do not carry it, and the engine falls back to lexicographic topic
    /// order for those.
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    /// Per-label centroid in feature space
    pub centroids: BTreeMap<String, Vec<f64>>,
    /// Softmax temperature for converting distances into probabilities
    #[serde(default = "default_sharpness")]
    pub sharpness: f64,
}

fn default_sharpness() -> f64 {
    4.0
}

/// A loaded, validated nearest-centroid model
#[derive(Debug, Clone)]
pub struct CentroidModel {
    artifact: ModelArtifact,
}

impl CentroidModel {
    /// Load and validate an artifact from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            EngineError::classifier(format!("cannot open model artifact {}: {e}", path.display()))
        })?;
        let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| {
                EngineError::classifier(format!(
                    "cannot parse model artifact {}: {e}",
                    path.display()
                ))
            })?;
        Self::from_artifact(artifact)
    }

    /// Validate an already-deserialized artifact
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        if artifact.labels.is_empty() {
            return Err(EngineError::classifier("model artifact has no labels"));
        }
        let dims = artifact
            .feature_names
            .as_ref()
            .map(|names| names.len());
        for label in &artifact.labels {
            let centroid = artifact.centroids.get(label).ok_or_else(|| {
                EngineError::classifier(format!("label '{label}' has no centroid"))
            })?;
            if let Some(dims) = dims {
                if centroid.len() != dims {
                    return Err(EngineError::classifier(format!(
                        "centroid for '{label}' has {} dimensions, expected {dims}",
                        centroid.len()
                    )));
                }
            }
        }
        Ok(Self { artifact })
    }

    fn distances(&self, features: &[f64]) -> anyhow::Result<Vec<(usize, f64)>> {
        self.artifact
            .labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let centroid = &self.artifact.centroids[label];
                if centroid.len() != features.len() {
                    anyhow::bail!(
                        "feature vector has {} dimensions, centroid for '{label}' has {}",
                        features.len(),
                        centroid.len()
                    );
                }
                let squared: f64 = features
                    .iter()
                    .zip(centroid)
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum();
                Ok((index, squared.sqrt()))
            })
            .collect()
    }
}

impl Classifier for CentroidModel {
    fn feature_names(&self) -> Option<Vec<String>> {
        self.artifact.feature_names.clone()
    }

    fn labels(&self) -> Vec<String> {
        self.artifact.labels.clone()
    }

    fn predict(&self, features: &[f64]) -> anyhow::Result<String> {
        let distances = self.distances(features)?;
        let (index, _) = distances
            .iter()
            .copied()
            // strictly-less comparison keeps the earliest label on ties
            .fold(None::<(usize, f64)>, |best, candidate| match best {
                Some((_, best_distance)) if candidate.1 >= best_distance => best,
                _ => Some(candidate),
            })
            .ok_or_else(|| anyhow::anyhow!("model has no labels"))?;
        Ok(self.artifact.labels[index].clone())
    }

    fn predict_proba(&self, features: &[f64]) -> anyhow::Result<BTreeMap<String, f64>> {
        let distances = self.distances(features)?;
        let weights: Vec<f64> = distances
            .iter()
            .map(|(_, d)| (-self.artifact.sharpness * d).exp())
            .collect();
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            anyhow::bail!("softmax normalization underflowed");
        }
        Ok(distances
            .iter()
            .zip(&weights)
            .map(|((index, _), weight)| (self.artifact.labels[*index].clone(), weight / total))
            .collect())
    }
}
