//! Study Aggregation: frame threshold, positive-fraction gating, study
//! probability, confidence interval, severity ranking, localization.

pub mod localization;
pub mod pipeline;
pub mod severity;
pub mod types;

pub use localization::bounding_volume;
pub use pipeline::{aggregate, StudyAggregator};
pub use severity::{most_dangerous, severity_rank};
pub use types::AggregationConfig;
