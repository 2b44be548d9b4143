//! Confidence aggregation: classifier label mass into coarse groups

use std::collections::BTreeMap;

use crate::core::{group_for_label, BandGroup, LegacyBand, ObpBand, Taxonomy};

/// Probability mass per 3-value band group.
///
/// Sums the classifier's per-label probabilities into Weak / Developing /
/// Strong using the band mapping table. Labels outside both taxonomies
/// contribute nothing; no mass is invented.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroupConfidence {
    pub weak: f64,
    pub developing: f64,
    pub strong: f64,
}

impl GroupConfidence {
    pub fn total(&self) -> f64 {
        self.weak + self.developing + self.strong
    }
}

/// Aggregate per-label probabilities into group confidence.
///
/// Tolerates a classifier whose vocabulary differs from the resolver's
/// taxonomy: legacy codes and OBP labels both land in the right group via
/// the mapping table, so a legacy-trained model keeps reporting sensible
/// confidence under an OBP deployment.
pub fn aggregate_group_confidence(probabilities: &BTreeMap<String, f64>) -> GroupConfidence {
    let mut confidence = GroupConfidence::default();
    for (label, probability) in probabilities {
        match group_for_label(label) {
            Some(BandGroup::Weak) => confidence.weak += probability,
            Some(BandGroup::Developing) => confidence.developing += probability,
            Some(BandGroup::Strong) => confidence.strong += probability,
            None => {}
        }
    }
    confidence
}

/// Per-band probability mass under the active taxonomy.
///
/// Legacy classifier labels convert into OBP bands through the fixed mapping
/// table when the deployment resolves OBP bands. The reverse direction has
/// no defined mapping, so OBP labels under a legacy deployment only count
/// when they parse as legacy; everything unmapped is dropped.
pub fn aggregate_band_mass(
    probabilities: &BTreeMap<String, f64>,
    taxonomy: Taxonomy,
) -> BTreeMap<&'static str, f64> {
    let mut mass: BTreeMap<&'static str, f64> = BTreeMap::new();
    for (label, probability) in probabilities {
        let band_label = match taxonomy {
            Taxonomy::Legacy5 => LegacyBand::parse(label).map(|band| band.label()),
            Taxonomy::Obp4 => ObpBand::parse(label)
                .or_else(|| LegacyBand::parse(label).map(|band| band.to_obp()))
                .map(|band| band.label()),
        };
        if let Some(band_label) = band_label {
            *mass.entry(band_label).or_insert(0.0) += probability;
        }
    }
    mass
}
