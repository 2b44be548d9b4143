pub mod bands;
pub mod errors;
pub mod types;

pub use bands::{group_for_label, group_label, Band, BandGroup, LegacyBand, ObpBand, Taxonomy};
pub use errors::{EngineError, Result};
pub use types::{AttemptRequest, ResultRecord, TopicRow};
