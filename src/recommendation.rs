//! Band-keyed recommendation text
//!
//! Pure template lookup: resolved band → fixed guidance message. Bands that
//! did not resolve get the generic fallback instead of an error.

use crate::core::{Band, LegacyBand, ObpBand};

/// Message used when the resolved band maps to neither taxonomy
const AMBIGUOUS_RESULT: &str = "Analysis complete, but the predicted band was ambiguous. \
     Please review your topic scores and overall performance.";

/// Build the recommendation message for a resolved band.
///
/// No interpolation beyond the band's display label.
pub fn recommendation_text(band: Option<Band>) -> String {
    let band = match band {
        Some(band) => band,
        None => return AMBIGUOUS_RESULT.to_string(),
    };
    let guidance = match band {
        Band::Obp(ObpBand::Basic) => {
            "Your foundation requires strong remediation. Focus immediately on the \
             identified weak and developing topics to rebuild your core understanding."
        }
        Band::Obp(ObpBand::Intermediate) => {
            "You are developing consistency. Prioritize the identified topics to \
             strengthen your fundamentals and avoid recurring errors."
        }
        Band::Obp(ObpBand::Proficient) => {
            "You are performing well. Reinforce the remaining areas below the \
             Proficient threshold to maintain and stabilize your performance."
        }
        Band::Obp(ObpBand::Exemplary) => {
            "Excellent performance. Strengthen minor weak spots for mastery and \
             long-term retention."
        }
        Band::Legacy(LegacyBand::Beginning) => {
            "Your foundation requires strong remediation. Focus immediately on the \
             identified weak and developing topics to rebuild your core understanding."
        }
        Band::Legacy(LegacyBand::Developing) => {
            "You are developing consistency. Prioritize the identified topics to \
             strengthen your fundamentals and avoid recurring errors."
        }
        Band::Legacy(LegacyBand::ApproachingProficiency) => {
            "You are close to the proficiency standard. Concentrate on the identified \
             topics to close the remaining gap."
        }
        Band::Legacy(LegacyBand::Proficient) => {
            "You are performing well. Reinforce the remaining areas below the \
             Proficient threshold to maintain and stabilize your performance."
        }
        Band::Legacy(LegacyBand::Advanced) => {
            "Excellent performance. Strengthen minor weak spots for mastery and \
             long-term retention."
        }
    };
    format!(
        "Your projected proficiency band is {}. {}",
        band.label(),
        guidance
    )
}
