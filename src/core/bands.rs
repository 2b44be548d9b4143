/// Band taxonomies and the mapping table that reconciles them
///
/// Two closed taxonomies coexist across deployments: the legacy 5-band scale
/// and the 4-band OBP scale. This module is the single source of truth for
/// their codes, display labels, the legacy→OBP conversion, and the collapse
/// into the 3-value group used for confidence summaries. Nothing else in the
/// pipeline is allowed to compare band strings directly.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which band taxonomy a deployment resolves into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Taxonomy {
    /// Legacy 5-band scale (Beginning .. Advanced)
    Legacy5,
    /// 4-band OBP scale (Basic .. Exemplary)
    Obp4,
}

/// Legacy 5-band proficiency scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LegacyBand {
    Beginning,
    Developing,
    ApproachingProficiency,
    Proficient,
    Advanced,
}

impl LegacyBand {
    pub const ALL: [LegacyBand; 5] = [
        LegacyBand::Beginning,
        LegacyBand::Developing,
        LegacyBand::ApproachingProficiency,
        LegacyBand::Proficient,
        LegacyBand::Advanced,
    ];

    /// Short wire code, as emitted by legacy classifiers
    pub fn code(&self) -> &'static str {
        match self {
            LegacyBand::Beginning => "B",
            LegacyBand::Developing => "D",
            LegacyBand::ApproachingProficiency => "AP",
            LegacyBand::Proficient => "P",
            LegacyBand::Advanced => "A",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            LegacyBand::Beginning => "Beginning",
            LegacyBand::Developing => "Developing",
            LegacyBand::ApproachingProficiency => "Approaching Proficiency",
            LegacyBand::Proficient => "Proficient",
            LegacyBand::Advanced => "Advanced",
        }
    }

    /// Fixed legacy→OBP conversion: B→Basic, D→Basic, AP→Intermediate,
    /// P→Proficient, A→Exemplary.
    pub fn to_obp(&self) -> ObpBand {
        match self {
            LegacyBand::Beginning => ObpBand::Basic,
            LegacyBand::Developing => ObpBand::Basic,
            LegacyBand::ApproachingProficiency => ObpBand::Intermediate,
            LegacyBand::Proficient => ObpBand::Proficient,
            LegacyBand::Advanced => ObpBand::Exemplary,
        }
    }

    /// Collapse into the 3-value group used for confidence summaries
    pub fn group(&self) -> BandGroup {
        match self {
            LegacyBand::Beginning | LegacyBand::Developing => BandGroup::Weak,
            LegacyBand::ApproachingProficiency => BandGroup::Developing,
            LegacyBand::Proficient | LegacyBand::Advanced => BandGroup::Strong,
        }
    }

    /// Parse a wire code or display label
    pub fn parse(s: &str) -> Option<LegacyBand> {
        Self::ALL
            .iter()
            .copied()
            .find(|band| band.code() == s || band.label() == s)
    }
}

/// 4-band OBP proficiency scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ObpBand {
    Basic,
    Intermediate,
    Proficient,
    Exemplary,
}

impl ObpBand {
    pub const ALL: [ObpBand; 4] = [
        ObpBand::Basic,
        ObpBand::Intermediate,
        ObpBand::Proficient,
        ObpBand::Exemplary,
    ];

    /// Short wire code
    pub fn code(&self) -> &'static str {
        match self {
            ObpBand::Basic => "B",
            ObpBand::Intermediate => "I",
            ObpBand::Proficient => "P",
            ObpBand::Exemplary => "E",
        }
    }

    /// Display label; OBP deployments also use this as the wire value
    pub fn label(&self) -> &'static str {
        match self {
            ObpBand::Basic => "Basic",
            ObpBand::Intermediate => "Intermediate",
            ObpBand::Proficient => "Proficient",
            ObpBand::Exemplary => "Exemplary",
        }
    }

    /// Collapse into the 3-value group used for confidence summaries
    pub fn group(&self) -> BandGroup {
        match self {
            ObpBand::Basic => BandGroup::Weak,
            ObpBand::Intermediate => BandGroup::Developing,
            ObpBand::Proficient | ObpBand::Exemplary => BandGroup::Strong,
        }
    }

    /// Parse a display label or wire code
    pub fn parse(s: &str) -> Option<ObpBand> {
        Self::ALL
            .iter()
            .copied()
            .find(|band| band.label() == s || band.code() == s)
    }
}

/// A resolved band from either taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Legacy(LegacyBand),
    Obp(ObpBand),
}

impl Band {
    /// Wire value reported to callers: legacy deployments emit short codes,
    /// OBP deployments emit display labels.
    pub fn wire_value(&self) -> &'static str {
        match self {
            Band::Legacy(band) => band.code(),
            Band::Obp(band) => band.label(),
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Band::Legacy(band) => band.label(),
            Band::Obp(band) => band.label(),
        }
    }

    /// Collapse into the 3-value group
    pub fn group(&self) -> BandGroup {
        match self {
            Band::Legacy(band) => band.group(),
            Band::Obp(band) => band.group(),
        }
    }

    /// Lowest band of a taxonomy, used when an attempt carries no scores
    pub fn lowest(taxonomy: Taxonomy) -> Band {
        match taxonomy {
            Taxonomy::Legacy5 => Band::Legacy(LegacyBand::Beginning),
            Taxonomy::Obp4 => Band::Obp(ObpBand::Basic),
        }
    }

    /// Parse a label against the active taxonomy first, then the other one.
    /// Shared codes ("B", "P", "Proficient") collapse to the same group under
    /// both taxonomies, so the fallback never changes the group outcome.
    pub fn parse(s: &str, taxonomy: Taxonomy) -> Option<Band> {
        match taxonomy {
            Taxonomy::Legacy5 => LegacyBand::parse(s)
                .map(Band::Legacy)
                .or_else(|| ObpBand::parse(s).map(Band::Obp)),
            Taxonomy::Obp4 => ObpBand::parse(s)
                .map(Band::Obp)
                .or_else(|| LegacyBand::parse(s).map(Band::Legacy)),
        }
    }
}

/// Coarse 3-value collapse shared by both taxonomies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandGroup {
    Weak,
    Developing,
    Strong,
}

impl BandGroup {
    pub fn label(&self) -> &'static str {
        match self {
            BandGroup::Weak => "Weak",
            BandGroup::Developing => "Developing",
            BandGroup::Strong => "Strong",
        }
    }
}

/// Group for an arbitrary classifier label, bridging both vocabularies.
/// Returns `None` for labels outside either taxonomy.
pub fn group_for_label(label: &str) -> Option<BandGroup> {
    LegacyBand::parse(label)
        .map(|band| band.group())
        .or_else(|| ObpBand::parse(label).map(|band| band.group()))
}

/// Label rendered for a band that may not have resolved
pub fn group_label(band: Option<Band>) -> &'static str {
    band.map(|b| b.group().label()).unwrap_or("Unknown")
}
