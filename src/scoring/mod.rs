pub mod features;
pub mod normalize;

pub use features::{build_feature_vector, FeatureVector};
pub use normalize::normalize_scores;
