//! Band resolution: ordered threshold rules vs the classifier's own label

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::{Band, LegacyBand, ObpBand, Taxonomy};

/// How the final band is resolved. A deployment picks exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionPolicy {
    /// Ignore the classifier's label; resolve purely from the average score
    /// via ordered threshold bands.
    Override,
    /// Return the classifier's raw predicted label unchanged.
    ModelTrust,
}

/// The resolved band plus the wire value reported to callers.
///
/// Under the model-trust policy the wire value is the classifier's raw
/// label, which may fall outside both taxonomies; `band` is `None` then and
/// downstream consumers degrade to their "Unknown" handling.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub wire_value: String,
    pub band: Option<Band>,
}

/// Mean of all topic scores, defined as 0.0 for an empty attempt so a
/// scoreless request resolves to the lowest band instead of failing.
pub fn average_score(scores: &BTreeMap<String, f64>) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.values().sum::<f64>() / scores.len() as f64
}

/// Resolve the final band for an attempt.
///
/// The classifier is always invoked for its probabilities before this point;
/// under the override policy only its label is discarded here.
pub fn resolve_band(
    average: f64,
    classifier_label: &str,
    policy: ResolutionPolicy,
    taxonomy: Taxonomy,
) -> Resolution {
    match policy {
        ResolutionPolicy::Override => {
            let band = match taxonomy {
                Taxonomy::Legacy5 => Band::Legacy(legacy_band_for_average(average)),
                Taxonomy::Obp4 => Band::Obp(obp_band_for_average(average)),
            };
            Resolution {
                wire_value: band.wire_value().to_string(),
                band: Some(band),
            }
        }
        ResolutionPolicy::ModelTrust => Resolution {
            wire_value: classifier_label.to_string(),
            band: Band::parse(classifier_label, taxonomy),
        },
    }
}

/// Legacy 5-band thresholds, evaluated high→low, first match wins
fn legacy_band_for_average(average: f64) -> LegacyBand {
    match average {
        a if a >= 0.90 => LegacyBand::Advanced,
        a if a >= 0.85 => LegacyBand::Proficient,
        a if a >= 0.80 => LegacyBand::ApproachingProficiency,
        a if a >= 0.75 => LegacyBand::Developing,
        _ => LegacyBand::Beginning,
    }
}

/// 4-band OBP thresholds
fn obp_band_for_average(average: f64) -> ObpBand {
    match average {
        a if a < 0.50 => ObpBand::Basic,
        a if a < 0.75 => ObpBand::Intermediate,
        a if a < 0.90 => ObpBand::Proficient,
        _ => ObpBand::Exemplary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(name, score)| (name.to_string(), *score))
            .collect()
    }

    #[test]
    fn test_average_of_empty_is_zero() {
        assert_eq!(average_score(&BTreeMap::new()), 0.0);
    }

    #[test]
    fn test_average_of_scores() {
        let avg = average_score(&scores(&[("A", 0.95), ("B", 0.92)]));
        assert!((avg - 0.935).abs() < 1e-12);
    }

    #[test]
    fn test_legacy_threshold_ladder() {
        assert_eq!(legacy_band_for_average(0.95), LegacyBand::Advanced);
        assert_eq!(legacy_band_for_average(0.87), LegacyBand::Proficient);
        assert_eq!(legacy_band_for_average(0.82), LegacyBand::ApproachingProficiency);
        assert_eq!(legacy_band_for_average(0.76), LegacyBand::Developing);
        assert_eq!(legacy_band_for_average(0.40), LegacyBand::Beginning);
    }

    #[test]
    fn test_legacy_threshold_boundaries_exact() {
        assert_eq!(legacy_band_for_average(0.90), LegacyBand::Advanced);
        assert_eq!(legacy_band_for_average(0.85), LegacyBand::Proficient);
        assert_eq!(legacy_band_for_average(0.80), LegacyBand::ApproachingProficiency);
        assert_eq!(legacy_band_for_average(0.75), LegacyBand::Developing);
        assert_eq!(legacy_band_for_average(0.7499), LegacyBand::Beginning);
    }

    #[test]
    fn test_obp_threshold_ladder() {
        assert_eq!(obp_band_for_average(0.30), ObpBand::Basic);
        assert_eq!(obp_band_for_average(0.60), ObpBand::Intermediate);
        assert_eq!(obp_band_for_average(0.80), ObpBand::Proficient);
        assert_eq!(obp_band_for_average(0.95), ObpBand::Exemplary);
    }

    #[test]
    fn test_obp_threshold_boundaries_exact() {
        assert_eq!(obp_band_for_average(0.50), ObpBand::Intermediate);
        assert_eq!(obp_band_for_average(0.75), ObpBand::Proficient);
        assert_eq!(obp_band_for_average(0.90), ObpBand::Exemplary);
        assert_eq!(obp_band_for_average(0.4999), ObpBand::Basic);
    }

    #[test]
    fn test_override_ignores_classifier_label() {
        let resolution = resolve_band(0.92, "B", ResolutionPolicy::Override, Taxonomy::Legacy5);
        assert_eq!(resolution.wire_value, "A");
        assert_eq!(resolution.band, Some(Band::Legacy(LegacyBand::Advanced)));
    }

    #[test]
    fn test_override_obp_reports_label() {
        let resolution = resolve_band(0.55, "A", ResolutionPolicy::Override, Taxonomy::Obp4);
        assert_eq!(resolution.wire_value, "Intermediate");
        assert_eq!(resolution.band, Some(Band::Obp(ObpBand::Intermediate)));
    }

    #[test]
    fn test_model_trust_passes_label_through() {
        let resolution = resolve_band(0.10, "AP", ResolutionPolicy::ModelTrust, Taxonomy::Legacy5);
        assert_eq!(resolution.wire_value, "AP");
        assert_eq!(
            resolution.band,
            Some(Band::Legacy(LegacyBand::ApproachingProficiency))
        );
    }

    #[test]
    fn test_model_trust_unknown_label_keeps_wire_value() {
        let resolution = resolve_band(0.10, "Zeta", ResolutionPolicy::ModelTrust, Taxonomy::Obp4);
        assert_eq!(resolution.wire_value, "Zeta");
        assert_eq!(resolution.band, None);
    }

    #[test]
    fn test_empty_attempt_resolves_to_lowest_band() {
        let average = average_score(&BTreeMap::new());
        let legacy = resolve_band(average, "", ResolutionPolicy::Override, Taxonomy::Legacy5);
        assert_eq!(legacy.band, Some(Band::Legacy(LegacyBand::Beginning)));
        let obp = resolve_band(average, "", ResolutionPolicy::Override, Taxonomy::Obp4);
        assert_eq!(obp.band, Some(Band::Obp(ObpBand::Basic)));
    }
}
