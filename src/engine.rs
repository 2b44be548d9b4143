//! The evaluation pipeline: raw scores in, `ResultRecord` out
//!
//! One engine is constructed at startup around the loaded classifier and the
//! deployment's resolution configuration. Each evaluation is a synchronous,
//! stateless pass; concurrent requests share the engine by reference.

use std::sync::Arc;

use log::debug;

use crate::analysis::analyze_topics;
use crate::classify::{
    aggregate_group_confidence, average_score, resolve_band, run_inference, Classifier,
};
use crate::config::EngineConfig;
use crate::core::{group_label, AttemptRequest, Result, ResultRecord};
use crate::recommendation::recommendation_text;
use crate::scoring::{build_feature_vector, normalize_scores};

/// Band classification and topic analysis engine
pub struct Engine {
    classifier: Arc<dyn Classifier>,
    config: EngineConfig,
}

impl Engine {
    pub fn new(classifier: Arc<dyn Classifier>, config: EngineConfig) -> Self {
        Self { classifier, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate one attempt.
    ///
    /// Fails only on an uncoercible score or a classifier failure; every
    /// other input, including an empty score set, produces a record.
    pub fn evaluate(&self, request: &AttemptRequest) -> Result<ResultRecord> {
        let scores = normalize_scores(&request.topic_scores)?;
        debug!(
            "evaluating attempt student={} exam={} topics={}",
            request.student_id,
            request.exam_id,
            scores.len()
        );

        let features = build_feature_vector(&scores, self.classifier.feature_names());
        let output = run_inference(self.classifier.as_ref(), &features)?;

        let average = average_score(&scores);
        let resolution = resolve_band(
            average,
            &output.label,
            self.config.policy,
            self.config.taxonomy,
        );
        debug!(
            "resolved band={} (average={:.4}, classifier label={})",
            resolution.wire_value, average, output.label
        );

        let confidence = aggregate_group_confidence(&output.probabilities);
        let analysis = analyze_topics(&scores);
        let recommendation = recommendation_text(resolution.band);

        Ok(ResultRecord {
            student_id: request.student_id,
            exam_id: request.exam_id,
            predicted_band: resolution.wire_value,
            band_group: group_label(resolution.band).to_string(),
            confidence_weak: confidence.weak,
            confidence_developing: confidence.developing,
            confidence_strong: confidence.strong,
            improvement_count: analysis.improvement_topics.len(),
            improvement_topics: analysis.improvement_topics,
            strong_count: analysis.strong_topics.len(),
            strong_topics: analysis.strong_topics,
            recommendation_text: recommendation,
            topic_score_table: analysis.rows,
        })
    }
}
