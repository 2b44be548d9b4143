//! Topic tiering and improvement analysis
//!
//! Sorts an attempt's topics by score and partitions them at the MPS cut
//! points into Weak / Developing / Strong, producing the improvement and
//! strength lists plus the per-topic display table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::TopicRow;

/// Weak topics: score < 50%
pub const WEAK_TOPIC_THRESHOLD: f64 = 0.50;
/// Developing topics: 50% <= score < 75%; Strong at or above
pub const DEVELOPING_TOPIC_THRESHOLD: f64 = 0.75;

/// Per-topic tier at the MPS cut points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicTier {
    Weak,
    Developing,
    Strong,
}

impl TopicTier {
    /// Classify one topic score. Boundary scores tier upward: exactly 0.50
    /// is Developing, exactly 0.75 is Strong.
    pub fn from_score(score: f64) -> TopicTier {
        if score < WEAK_TOPIC_THRESHOLD {
            TopicTier::Weak
        } else if score < DEVELOPING_TOPIC_THRESHOLD {
            TopicTier::Developing
        } else {
            TopicTier::Strong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TopicTier::Weak => "Weak",
            TopicTier::Developing => "Developing",
            TopicTier::Strong => "Strong",
        }
    }
}

/// Tiered view of one attempt's topics
#[derive(Debug, Clone, PartialEq)]
pub struct TopicAnalysis {
    /// All topics, ascending by score (ties ascending by topic name)
    pub rows: Vec<TopicRow>,
    /// Weak topics first, then developing, each ascending by score
    pub improvement_topics: Vec<String>,
    /// Strong topics, ascending by score
    pub strong_topics: Vec<String>,
}

/// score × 100, rounded to 2 decimal places for display
pub fn round_percent(score: f64) -> f64 {
    (score * 10_000.0).round() / 100.0
}

/// Sort, tier, and partition an attempt's normalized scores.
///
/// The input map iterates in key order and the sort is stable, so topics
/// with equal scores order by name and the output is identical across runs.
pub fn analyze_topics(scores: &BTreeMap<String, f64>) -> TopicAnalysis {
    let mut sorted: Vec<(&String, f64)> = scores.iter().map(|(name, s)| (name, *s)).collect();
    sorted.sort_by(|a, b| a.1.total_cmp(&b.1));

    let rows: Vec<TopicRow> = sorted
        .iter()
        .map(|(topic, score)| TopicRow {
            topic: (*topic).clone(),
            score_raw: *score,
            score_percent: round_percent(*score),
            status: TopicTier::from_score(*score),
        })
        .collect();

    // Ascending order means the weak tier already precedes the developing
    // tier, so the improvement list is a single filtered pass.
    let improvement_topics = rows
        .iter()
        .filter(|row| row.status != TopicTier::Strong)
        .map(|row| row.topic.clone())
        .collect();
    let strong_topics = rows
        .iter()
        .filter(|row| row.status == TopicTier::Strong)
        .map(|row| row.topic.clone())
        .collect();

    TopicAnalysis {
        rows,
        improvement_topics,
        strong_topics,
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
    fn test_tier_boundaries_exact() {
        assert_eq!(TopicTier::from_score(0.4999), TopicTier::Weak);
        assert_eq!(TopicTier::from_score(0.50), TopicTier::Developing);
        assert_eq!(TopicTier::from_score(0.7499), TopicTier::Developing);
        assert_eq!(TopicTier::from_score(0.75), TopicTier::Strong);
    }

    #[test]
    fn test_out_of_range_scores_tier_unclamped() {
        assert_eq!(TopicTier::from_score(-0.2), TopicTier::Weak);
        assert_eq!(TopicTier::from_score(1.4), TopicTier::Strong);
    }

    #[test]
    fn test_rows_sorted_ascending() {
        let analysis = analyze_topics(&scores(&[("A", 0.70), ("B", 0.40), ("C", 0.55)]));
        let ordered: Vec<&str> = analysis.rows.iter().map(|r| r.topic.as_str()).collect();
        assert_eq!(ordered, vec!["B", "C", "A"]);
        assert!(analysis
            .rows
            .windows(2)
            .all(|pair| pair[0].score_raw <= pair[1].score_raw));
    }

    #[test]
    fn test_equal_scores_order_by_name() {
        let analysis = analyze_topics(&scores(&[("Gamma", 0.6), ("Alpha", 0.6), ("Beta", 0.6)]));
        let ordered: Vec<&str> = analysis.rows.iter().map(|r| r.topic.as_str()).collect();
        assert_eq!(ordered, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_improvement_and_strong_partition() {
        let analysis = analyze_topics(&scores(&[
            ("A", 0.40),
            ("B", 0.55),
            ("C", 0.70),
            ("D", 0.80),
        ]));
        assert_eq!(analysis.improvement_topics, vec!["A", "B", "C"]);
        assert_eq!(analysis.strong_topics, vec!["D"]);
        assert_eq!(
            analysis.improvement_topics.len() + analysis.strong_topics.len(),
            analysis.rows.len()
        );
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(round_percent(0.4567), 45.67);
        assert_eq!(round_percent(0.7), 70.0);
        assert_eq!(round_percent(1.0), 100.0);
    }

    #[test]
    fn test_percent_in_rows() {
        let analysis = analyze_topics(&scores(&[("A", 0.678)]));
        assert_eq!(analysis.rows[0].score_percent, 67.8);
        assert_eq!(analysis.rows[0].status, TopicTier::Developing);
    }

    #[test]
    fn test_empty_scores_yield_empty_analysis() {
        let analysis = analyze_topics(&BTreeMap::new());
        assert!(analysis.rows.is_empty());
        assert!(analysis.improvement_topics.is_empty());
        assert!(analysis.strong_topics.is_empty());
    }
}
