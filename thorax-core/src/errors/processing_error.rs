//! Study processing errors.
//! Aggregates subsystem errors via `From` conversions.

use super::error_code::{self, ThoraxErrorCode};
use super::{AggregationError, ConfigError};

/// Errors that can occur while driving a study through the pipeline.
///
/// Frame-level classifier failures are non-fatal (the study downgrades
/// to partial); the variants here end processing for the whole study.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(
        "Upstream incomplete for study {study_uid}: \
         {classified} of {expected} frames classified"
    )]
    UpstreamIncomplete {
        study_uid: String,
        expected: u32,
        classified: u32,
    },

    #[error("Series selection failed for study {study_uid}: {message}")]
    SeriesSelection { study_uid: String, message: String },

    #[error("Frame extraction failed for series {series_uid}: {message}")]
    FrameExtraction { series_uid: String, message: String },

    #[error(
        "Classifier failed on frame {frame_index} of series {series_uid}: {message}"
    )]
    Classifier {
        series_uid: String,
        frame_index: u32,
        message: String,
    },

    #[error("Study {study_uid} is already being processed")]
    StudyAlreadyActive { study_uid: String },

    #[error("Study processing exceeded the {budget_secs}s budget")]
    Timeout { budget_secs: u64 },

    #[error("Study processing cancelled")]
    Cancelled,
}

impl ThoraxErrorCode for ProcessingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Aggregation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::UpstreamIncomplete { .. } => error_code::UPSTREAM_INCOMPLETE,
            Self::SeriesSelection { .. } => error_code::SERIES_SELECTION_ERROR,
            Self::FrameExtraction { .. } => error_code::FRAME_EXTRACTION_ERROR,
            Self::Classifier { .. } => error_code::CLASSIFIER_ERROR,
            Self::StudyAlreadyActive { .. } => error_code::STUDY_ALREADY_ACTIVE,
            Self::Timeout { .. } => error_code::TIMEOUT,
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}
