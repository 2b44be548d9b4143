// Export modules for library usage
pub mod analysis;
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod io;
pub mod recommendation;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    AttemptRequest, Band, BandGroup, EngineError, LegacyBand, ObpBand, Result, ResultRecord,
    Taxonomy, TopicRow,
};

pub use crate::analysis::{analyze_topics, TopicAnalysis, TopicTier};

pub use crate::classify::{
    aggregate_group_confidence, average_score, resolve_band, CentroidModel, Classifier,
    ClassifierOutput, GroupConfidence, Resolution, ResolutionPolicy,
};

pub use crate::config::{BandmapConfig, EngineConfig};

pub use crate::engine::Engine;

pub use crate::io::{create_writer, OutputFormat, OutputWriter};

pub use crate::recommendation::recommendation_text;

pub use crate::scoring::{build_feature_vector, normalize_scores, FeatureVector};
