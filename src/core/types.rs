//! Transport-facing request and result records

use serde::{Deserialize, Serialize};

use crate::analysis::TopicTier;

/// A validated evaluation request: one attempt's per-topic scores.
///
/// Built per incoming request, immutable once constructed, and discarded
/// after the response is produced; nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRequest {
    pub student_id: i64,
    pub exam_id: i64,
    /// Raw topic→score mapping, e.g. `{ "Gen Ed - English": 0.7 }`. Values
    /// are coerced by the score normalizer; anything non-numeric rejects the
    /// whole request.
    pub topic_scores: serde_json::Map<String, serde_json::Value>,
}

/// One row of the per-topic display table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRow {
    pub topic: String,
    pub score_raw: f64,
    /// score × 100, rounded to 2 decimal places
    pub score_percent: f64,
    pub status: TopicTier,
}

/// The engine's output for one attempt.
///
/// Constructed once per request and returned; evaluating the same input
/// twice yields a byte-identical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub student_id: i64,
    pub exam_id: i64,
    /// Resolved band: legacy deployments report short codes (B, D, AP, P, A),
    /// OBP deployments report labels (Basic .. Exemplary). Under the
    /// model-trust policy this is the classifier's raw label.
    pub predicted_band: String,
    /// Weak / Developing / Strong, or "Unknown" when the band did not map
    pub band_group: String,
    pub confidence_weak: f64,
    pub confidence_developing: f64,
    pub confidence_strong: f64,
    /// Weak topics first, then developing, ascending by score within each
    pub improvement_topics: Vec<String>,
    pub improvement_count: usize,
    pub strong_topics: Vec<String>,
    pub strong_count: usize,
    pub recommendation_text: String,
    /// All topics, ascending by score
    pub topic_score_table: Vec<TopicRow>,
}
