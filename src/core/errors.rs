//! Shared error types for the evaluation pipeline

use thiserror::Error;

/// Main error type for bandmap operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// A topic score could not be coerced to a number; the whole request is
    /// rejected, no partial results are produced.
    #[error("invalid score for topic '{topic}': {message}")]
    InvalidScore { topic: String, message: String },

    /// The classifier is missing or an inference call failed. Fatal to the
    /// request; transports report this as a service-unavailable condition.
    #[error("classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// Create an invalid-score error for a topic
    pub fn invalid_score(topic: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidScore {
            topic: topic.into(),
            message: message.into(),
        }
    }

    /// Create a classifier-unavailable error
    pub fn classifier(message: impl Into<String>) -> Self {
        Self::ClassifierUnavailable(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_score_display() {
        let err = EngineError::invalid_score("Gen Ed - English", "expected a number, got null");
        assert!(err.to_string().contains("Gen Ed - English"));
        assert!(err.to_string().contains("expected a number"));
    }

    #[test]
    fn test_classifier_unavailable_display() {
        let err = EngineError::classifier("inference call failed");
        assert!(err.to_string().contains("classifier unavailable"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "model.json not found");
        let err: EngineError = io_err.into();
        assert!(matches!(err, EngineError::Io(_)));
    }
}
