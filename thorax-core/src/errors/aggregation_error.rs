//! Aggregation errors: input and configuration validation failures.

use super::error_code::{self, ThoraxErrorCode};

/// Errors the study aggregator can report.
///
/// The aggregator is a pure function: it never retries and never
/// recovers locally. Every variant names the offending value so the
/// caller can decide whether to mark the study failed or partial.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregationError {
    #[error("Invalid input: empty frame set for study {study_uid}")]
    EmptyFrameSet { study_uid: String },

    #[error(
        "Invalid input: probability {probability} outside [0.0, 1.0] \
         (series {series_uid}, frame {frame_index})"
    )]
    ProbabilityOutOfRange {
        series_uid: String,
        frame_index: u32,
        probability: f64,
    },

    #[error("Invalid config: {field} = {value} outside [0.0, 1.0]")]
    ConfigOutOfRange { field: &'static str, value: f64 },
}

impl AggregationError {
    /// Whether this is an input-validation failure (vs configuration).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyFrameSet { .. } | Self::ProbabilityOutOfRange { .. }
        )
    }

    /// Whether this is a configuration-validation failure.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::ConfigOutOfRange { .. })
    }
}

impl ThoraxErrorCode for AggregationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyFrameSet { .. } | Self::ProbabilityOutOfRange { .. } => {
                error_code::INVALID_INPUT
            }
            Self::ConfigOutOfRange { .. } => error_code::INVALID_CONFIG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_split_input_from_config() {
        let input = AggregationError::EmptyFrameSet {
            study_uid: "1.2.3".to_string(),
        };
        let config = AggregationError::ConfigOutOfRange {
            field: "frame_threshold",
            value: 1.5,
        };
        assert_eq!(input.error_code(), error_code::INVALID_INPUT);
        assert_eq!(config.error_code(), error_code::INVALID_CONFIG);
        assert!(input.is_invalid_input());
        assert!(config.is_invalid_config());
    }

    #[test]
    fn message_names_offending_frame() {
        let err = AggregationError::ProbabilityOutOfRange {
            series_uid: "1.2.3.1".to_string(),
            frame_index: 42,
            probability: 1.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("1.5"));
        assert!(msg.contains("1.2.3.1"));
        assert!(msg.contains("42"));
    }
}
