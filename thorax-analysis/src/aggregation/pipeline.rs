//! Study-level aggregation: per-frame probabilities in, one verdict out.

use thorax_core::errors::AggregationError;
use thorax_core::types::{FrameLocator, FrameResult, ProcessingStatus, StudyResult};

use crate::confidence;

use super::localization;
use super::severity;
use super::types::AggregationConfig;

/// Aggregates a study's frame probabilities into a single verdict.
///
/// Stateless and side-effect free: the same frames and settings always
/// produce a bit-identical result, and independent studies can be
/// aggregated concurrently without locking.
#[derive(Debug)]
pub struct StudyAggregator {
    config: AggregationConfig,
}

impl StudyAggregator {
    /// Create an aggregator, validating the settings once.
    pub fn new(config: AggregationConfig) -> Result<Self, AggregationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create an aggregator with default settings.
    pub fn with_defaults() -> Self {
        Self {
            config: AggregationConfig::default(),
        }
    }

    /// The resolved settings this aggregator runs with.
    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Aggregate one study's frames into a `StudyResult`.
    ///
    /// `frames` holds every classified frame of the selected series.
    /// The returned result carries `ProcessingStatus::Success` and a
    /// zero processing time; the orchestration layer applies elapsed
    /// time and downgrades the status when frames were skipped.
    pub fn aggregate(
        &self,
        study_uid: &str,
        series_uid: &str,
        frames: &[FrameResult],
    ) -> Result<StudyResult, AggregationError> {
        if frames.is_empty() {
            return Err(AggregationError::EmptyFrameSet {
                study_uid: study_uid.to_string(),
            });
        }
        for frame in frames {
            // NaN fails the range check as well.
            if !(frame.probability >= 0.0 && frame.probability <= 1.0) {
                return Err(AggregationError::ProbabilityOutOfRange {
                    series_uid: frame.series_uid.clone(),
                    frame_index: frame.frame_index,
                    probability: frame.probability,
                });
            }
        }

        let positive: Vec<&FrameResult> = frames
            .iter()
            .filter(|f| f.probability >= self.config.frame_threshold)
            .collect();

        let n_frames = frames.len();
        let positive_fraction = positive.len() as f64 / n_frames as f64;
        let pathology = positive_fraction >= self.config.min_positive_fraction;

        // Study probability: mean over the positive frames for a
        // positive verdict, mean over all frames otherwise. A positive
        // verdict with an empty positive set (min_positive_fraction of
        // zero) falls back to the full sample.
        let sample: Vec<f64> = if pathology && !positive.is_empty() {
            positive.iter().map(|f| f.probability).collect()
        } else {
            frames.iter().map(|f| f.probability).collect()
        };

        let probability_of_pathology = confidence::sample_mean(&sample).clamp(0.0, 1.0);
        let ci_95 = confidence::confidence_interval(&sample, self.config.confidence_level);

        let (most_dangerous_pathology_type, pathology_localization) = if pathology {
            (
                severity::most_dangerous(&positive),
                localization::bounding_volume(&positive),
            )
        } else {
            (None, None)
        };

        let pathology_frames: Vec<FrameLocator> = positive
            .iter()
            .map(|f| FrameLocator {
                series_uid: f.series_uid.clone(),
                frame_index: f.frame_index,
            })
            .collect();

        tracing::debug!(
            study_uid,
            n_frames,
            positive = positive.len(),
            positive_fraction,
            pathology,
            "study aggregated"
        );

        Ok(StudyResult {
            study_uid: study_uid.to_string(),
            series_uid: series_uid.to_string(),
            probability_of_pathology,
            pathology: pathology as u8,
            ci_95,
            most_dangerous_pathology_type,
            pathology_localization,
            processing_status: ProcessingStatus::Success,
            time_of_processing: 0.0,
            n_frames: n_frames as u32,
            positive_fraction,
            pathology_frames,
        })
    }
}

/// Aggregate with throwaway settings. Validates `config` on every call;
/// long-lived callers should construct a `StudyAggregator` instead.
pub fn aggregate(
    study_uid: &str,
    series_uid: &str,
    frames: &[FrameResult],
    config: AggregationConfig,
) -> Result<StudyResult, AggregationError> {
    StudyAggregator::new(config)?.aggregate(study_uid, series_uid, frames)
}
