//! Drives one study end to end: select series, extract frames,
//! classify, aggregate.
//!
//! Frame-level classifier failures are non-fatal: the frame is skipped,
//! an event is emitted, and the study downgrades to partial. The whole
//! study fails only when no frame could be classified, on cancellation,
//! or when the per-study budget is exhausted.

use std::time::{Duration, Instant};

use rayon::prelude::*;

use thorax_core::errors::{ProcessingError, ThoraxErrorCode};
use thorax_core::events::{
    EventDispatcher, FrameSkippedEvent, StudyCompletedEvent, StudyFailedEvent,
    StudyStartedEvent,
};
use thorax_core::traits::{Cancellable, CancellationToken, FrameClassifier, FrameExtractor, SeriesSelector};
use thorax_core::types::{FrameResult, ProcessingStatus, StudyManifest, StudyResult};

use crate::aggregation::StudyAggregator;

use super::registry::ActiveStudyRegistry;

/// Orchestrates the per-study pipeline over the capability interfaces.
pub struct StudyProcessor<S, E, C> {
    selector: S,
    extractor: E,
    classifier: C,
    aggregator: StudyAggregator,
    registry: ActiveStudyRegistry,
    dispatcher: EventDispatcher,
    study_budget: Duration,
}

impl<S, E, C> StudyProcessor<S, E, C>
where
    S: SeriesSelector,
    E: FrameExtractor,
    C: FrameClassifier,
{
    pub fn new(
        selector: S,
        extractor: E,
        classifier: C,
        aggregator: StudyAggregator,
        registry: ActiveStudyRegistry,
        dispatcher: EventDispatcher,
        study_budget: Duration,
    ) -> Self {
        Self {
            selector,
            extractor,
            classifier,
            aggregator,
            registry,
            dispatcher,
            study_budget,
        }
    }

    /// The registry this processor registers in-flight studies with.
    pub fn registry(&self) -> &ActiveStudyRegistry {
        &self.registry
    }

    /// Process one study.
    ///
    /// On success the result's `time_of_processing` covers
    /// classification + aggregation, and `processing_status` is
    /// `Partial` when any frame was skipped. An error means the study
    /// must be recorded as failed by the caller; no partial result is
    /// fabricated.
    pub fn process_study(
        &self,
        manifest: &StudyManifest,
        token: &CancellationToken,
    ) -> Result<StudyResult, ProcessingError> {
        let study_uid = manifest.study_uid.as_str();

        let _guard = self.registry.begin(study_uid).ok_or_else(|| {
            ProcessingError::StudyAlreadyActive {
                study_uid: study_uid.to_string(),
            }
        })?;

        let started = Instant::now();
        let outcome = self.run_pipeline(manifest, token, started);

        match &outcome {
            Ok(result) => {
                self.dispatcher.emit_study_completed(&StudyCompletedEvent {
                    study_uid: study_uid.to_string(),
                    status: result.processing_status,
                    pathology: result.pathology,
                    duration_ms: started.elapsed().as_millis() as u64,
                });
            }
            Err(err) => {
                tracing::error!(study_uid, error = %err, "study processing failed");
                self.dispatcher.emit_study_failed(&StudyFailedEvent {
                    study_uid: study_uid.to_string(),
                    message: err.to_string(),
                    error_code: err.error_code().to_string(),
                });
            }
        }

        outcome
    }

    fn run_pipeline(
        &self,
        manifest: &StudyManifest,
        token: &CancellationToken,
        started: Instant,
    ) -> Result<StudyResult, ProcessingError> {
        let study_uid = manifest.study_uid.as_str();

        let series_uid = self.selector.select_series(manifest)?;
        let images = self.extractor.extract_frames(manifest, &series_uid)?;
        let expected = images.len() as u32;

        self.dispatcher.emit_study_started(&StudyStartedEvent {
            study_uid: study_uid.to_string(),
            series_uid: series_uid.clone(),
            frame_count: expected,
        });
        tracing::info!(study_uid, %series_uid, frames = expected, "study started");

        let mut classified: Vec<FrameResult> = Vec::with_capacity(images.len());
        let mut skipped = 0u32;

        for image in &images {
            if token.is_cancelled() {
                return Err(ProcessingError::Cancelled);
            }
            if started.elapsed() > self.study_budget {
                return Err(ProcessingError::Timeout {
                    budget_secs: self.study_budget.as_secs(),
                });
            }

            match self.classifier.classify(image) {
                Ok(frame) => classified.push(frame),
                Err(err) => {
                    // Corrupt slice or inference failure: skip the
                    // frame, keep the study alive.
                    skipped += 1;
                    tracing::warn!(
                        study_uid,
                        series_uid = %image.series_uid,
                        frame_index = image.frame_index,
                        error = %err,
                        "frame skipped"
                    );
                    self.dispatcher.emit_frame_skipped(&FrameSkippedEvent {
                        study_uid: study_uid.to_string(),
                        series_uid: image.series_uid.clone(),
                        frame_index: image.frame_index,
                        message: err.to_string(),
                    });
                }
            }
        }

        if classified.is_empty() {
            return Err(ProcessingError::UpstreamIncomplete {
                study_uid: study_uid.to_string(),
                expected,
                classified: 0,
            });
        }

        let result = self
            .aggregator
            .aggregate(study_uid, &series_uid, &classified)?;

        let status = if skipped > 0 {
            ProcessingStatus::Partial
        } else {
            ProcessingStatus::Success
        };

        Ok(result
            .with_status(status)
            .with_processing_time(started.elapsed().as_secs_f64()))
    }

    /// Process independent studies in parallel on the rayon pool.
    ///
    /// Results are returned in manifest order. Aggregation is pure and
    /// the registry is the only shared state, so studies never contend
    /// beyond its lock.
    pub fn process_batch(
        &self,
        manifests: &[StudyManifest],
        token: &CancellationToken,
    ) -> Vec<Result<StudyResult, ProcessingError>>
    where
        S: Sync,
        E: Sync,
        C: Sync,
    {
        manifests
            .par_iter()
            .map(|manifest| self.process_study(manifest, token))
            .collect()
    }
}
