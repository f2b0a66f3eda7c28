//! Study aggregator configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the study aggregation step.
///
/// All thresholds live in [0.0, 1.0] and are validated once at startup,
/// not per call.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Frame-level probability threshold: a frame at or above it counts
    /// as positive. Default: 0.60.
    pub frame_threshold: Option<f64>,
    /// Minimum fraction of positive frames for a positive study verdict.
    /// Default: 0.12.
    pub min_positive_fraction: Option<f64>,
    /// Two-sided confidence level for the study interval. Default: 0.95.
    pub confidence_level: Option<f64>,
}

impl AggregatorConfig {
    /// Returns the effective frame threshold, defaulting to 0.60.
    pub fn effective_frame_threshold(&self) -> f64 {
        self.frame_threshold.unwrap_or(0.60)
    }

    /// Returns the effective minimum positive fraction, defaulting to 0.12.
    pub fn effective_min_positive_fraction(&self) -> f64 {
        self.min_positive_fraction.unwrap_or(0.12)
    }

    /// Returns the effective confidence level, defaulting to 0.95.
    pub fn effective_confidence_level(&self) -> f64 {
        self.confidence_level.unwrap_or(0.95)
    }
}
