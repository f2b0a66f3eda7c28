//! Resolved aggregation settings.

use serde::{Deserialize, Serialize};

use thorax_core::config::AggregatorConfig;
use thorax_core::errors::AggregationError;

/// Fully-resolved settings for one aggregator instance.
///
/// Unlike `AggregatorConfig` (layered, optional fields), every value
/// here is concrete; `StudyAggregator::new` validates the ranges once
/// so the per-study path stays validation-free.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// A frame at or above this probability counts as positive.
    pub frame_threshold: f64,
    /// Minimum positive-frame fraction for a positive study verdict.
    pub min_positive_fraction: f64,
    /// Two-sided confidence level for the study interval.
    pub confidence_level: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            frame_threshold: 0.60,
            min_positive_fraction: 0.12,
            confidence_level: 0.95,
        }
    }
}

impl AggregationConfig {
    /// Resolve from the layered configuration.
    pub fn from_config(config: &AggregatorConfig) -> Self {
        Self {
            frame_threshold: config.effective_frame_threshold(),
            min_positive_fraction: config.effective_min_positive_fraction(),
            confidence_level: config.effective_confidence_level(),
        }
    }

    /// Validate that every threshold lies in [0.0, 1.0].
    pub fn validate(&self) -> Result<(), AggregationError> {
        let fields = [
            ("frame_threshold", self.frame_threshold),
            ("min_positive_fraction", self.min_positive_fraction),
            ("confidence_level", self.confidence_level),
        ];
        for (field, value) in fields {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AggregationError::ConfigOutOfRange { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_validates() {
        assert!(AggregationConfig::default().validate().is_ok());
    }

    #[test]
    fn nan_threshold_rejected() {
        let config = AggregationConfig {
            frame_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AggregationError::ConfigOutOfRange {
                field: "frame_threshold",
                ..
            })
        ));
    }

    #[test]
    fn resolution_from_layered_config() {
        let layered = AggregatorConfig {
            confidence_level: Some(0.9),
            ..Default::default()
        };
        let resolved = AggregationConfig::from_config(&layered);
        assert_eq!(resolved.confidence_level, 0.9);
        assert_eq!(resolved.frame_threshold, 0.60);
    }
}
