pub mod topics;

pub use topics::{
    analyze_topics, round_percent, TopicAnalysis, TopicTier, DEVELOPING_TOPIC_THRESHOLD,
    WEAK_TOPIC_THRESHOLD,
};
