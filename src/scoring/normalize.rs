//! Score normalization: arbitrary topic→value mappings into canonical floats

use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::{EngineError, Result};

/// Coerce a raw topic→value mapping into `topic → f64`.
///
/// Accepted numeric-like values: JSON numbers, numeric strings, and booleans
/// (1.0 / 0.0). Anything else rejects the whole request with
/// [`EngineError::InvalidScore`]; no partial results are produced.
///
/// Scores are expected in [0,1] but out-of-range values pass through
/// unclamped. An empty mapping is valid and yields an empty map.
///
/// The output is key-ordered so downstream iteration is deterministic.
pub fn normalize_scores(raw: &serde_json::Map<String, Value>) -> Result<BTreeMap<String, f64>> {
    let mut scores = BTreeMap::new();
    for (topic, value) in raw {
        let score = coerce_score(value)
            .ok_or_else(|| EngineError::invalid_score(topic, describe_rejection(value)))?;
        scores.insert(topic.clone(), score);
    }
    Ok(scores)
}

/// Coerce a single JSON value to a float, or `None` if it is not numeric-like
fn coerce_score(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn describe_rejection(value: &Value) -> String {
    match value {
        Value::Null => "expected a number, got null".to_string(),
        Value::String(s) => format!("cannot parse '{}' as a number", s),
        Value::Array(_) => "expected a number, got an array".to_string(),
        Value::Object(_) => "expected a number, got an object".to_string(),
        // Numbers only fail coercion when they do not fit in an f64
        _ => "value is not representable as a number".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> serde_json::Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be a JSON object"),
        }
    }

    #[test]
    fn test_numbers_pass_through() {
        let scores = normalize_scores(&raw(json!({"A": 0.4, "B": 1, "C": 0}))).unwrap();
        assert_eq!(scores.get("A"), Some(&0.4));
        assert_eq!(scores.get("B"), Some(&1.0));
        assert_eq!(scores.get("C"), Some(&0.0));
    }

    #[test]
    fn test_numeric_strings_coerce() {
        let scores = normalize_scores(&raw(json!({"A": "0.55", "B": " 0.7 "}))).unwrap();
        assert_eq!(scores.get("A"), Some(&0.55));
        assert_eq!(scores.get("B"), Some(&0.7));
    }

    #[test]
    fn test_booleans_coerce() {
        let scores = normalize_scores(&raw(json!({"A": true, "B": false}))).unwrap();
        assert_eq!(scores.get("A"), Some(&1.0));
        assert_eq!(scores.get("B"), Some(&0.0));
    }

    #[test]
    fn test_out_of_range_passes_unclamped() {
        let scores = normalize_scores(&raw(json!({"A": -0.25, "B": 1.8}))).unwrap();
        assert_eq!(scores.get("A"), Some(&-0.25));
        assert_eq!(scores.get("B"), Some(&1.8));
    }

    #[test]
    fn test_null_rejects_whole_request() {
        let err = normalize_scores(&raw(json!({"A": 0.5, "B": null}))).unwrap_err();
        match err {
            EngineError::InvalidScore { topic, .. } => assert_eq!(topic, "B"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_string_rejects() {
        let err = normalize_scores(&raw(json!({"A": "high"}))).unwrap_err();
        assert!(err.to_string().contains("high"));
    }

    #[test]
    fn test_array_and_object_reject() {
        assert!(normalize_scores(&raw(json!({"A": [0.5]}))).is_err());
        assert!(normalize_scores(&raw(json!({"A": {"v": 0.5}}))).is_err());
    }

    #[test]
    fn test_empty_mapping_is_valid() {
        let scores = normalize_scores(&raw(json!({}))).unwrap();
        assert!(scores.is_empty());
    }
}
