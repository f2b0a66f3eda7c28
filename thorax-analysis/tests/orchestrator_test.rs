//! Orchestration-layer behavior: partial failures, upstream collapse,
//! cancellation, budget, and the in-flight registry.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thorax_analysis::aggregation::StudyAggregator;
use thorax_analysis::orchestrator::{ActiveStudyRegistry, StudyProcessor};
use thorax_core::errors::ProcessingError;
use thorax_core::events::{EventDispatcher, FrameSkippedEvent, StudyEventHandler};
use thorax_core::traits::{
    Cancellable, CancellationToken, FrameClassifier, FrameExtractor, SeriesSelector,
};
use thorax_core::types::{
    FrameImage, FrameResult, ProcessingStatus, SeriesDescriptor, StudyManifest,
};

// ---- Stub capabilities ----

struct FirstSeriesSelector;

impl SeriesSelector for FirstSeriesSelector {
    fn select_series(&self, study: &StudyManifest) -> Result<String, ProcessingError> {
        study
            .series
            .first()
            .map(|s| s.series_uid.clone())
            .ok_or_else(|| ProcessingError::SeriesSelection {
                study_uid: study.study_uid.clone(),
                message: "study has no series".to_string(),
            })
    }
}

struct SyntheticExtractor;

impl FrameExtractor for SyntheticExtractor {
    fn extract_frames(
        &self,
        study: &StudyManifest,
        series_uid: &str,
    ) -> Result<Vec<FrameImage>, ProcessingError> {
        let count = study
            .series(series_uid)
            .map(|s| s.frame_count)
            .unwrap_or(0);
        Ok((0..count)
            .map(|i| FrameImage {
                series_uid: series_uid.to_string(),
                frame_index: i,
                pixels: vec![0u8; 16],
            })
            .collect())
    }
}

/// Returns a fixed probability per frame; fails every `fail_every`-th
/// frame to simulate corrupt slices.
struct ScriptedClassifier {
    probability: f64,
    fail_every: Option<u32>,
    delay: Duration,
}

impl ScriptedClassifier {
    fn constant(probability: f64) -> Self {
        Self {
            probability,
            fail_every: None,
            delay: Duration::ZERO,
        }
    }
}

impl FrameClassifier for ScriptedClassifier {
    fn classify(&self, frame: &FrameImage) -> Result<FrameResult, ProcessingError> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        if let Some(n) = self.fail_every {
            if frame.frame_index % n == 0 {
                return Err(ProcessingError::Classifier {
                    series_uid: frame.series_uid.clone(),
                    frame_index: frame.frame_index,
                    message: "corrupt pixel data".to_string(),
                });
            }
        }
        Ok(FrameResult::new(
            frame.series_uid.clone(),
            frame.frame_index,
            self.probability,
        ))
    }
}

struct FailingClassifier;

impl FrameClassifier for FailingClassifier {
    fn classify(&self, frame: &FrameImage) -> Result<FrameResult, ProcessingError> {
        Err(ProcessingError::Classifier {
            series_uid: frame.series_uid.clone(),
            frame_index: frame.frame_index,
            message: "decoder error".to_string(),
        })
    }
}

fn manifest(study_uid: &str, frame_count: u32) -> StudyManifest {
    StudyManifest {
        study_uid: study_uid.to_string(),
        series: vec![SeriesDescriptor {
            series_uid: format!("{study_uid}.1"),
            frame_count,
            description: Some("lung 1.0mm".to_string()),
        }],
    }
}

fn processor<C: FrameClassifier>(
    classifier: C,
    budget: Duration,
) -> StudyProcessor<FirstSeriesSelector, SyntheticExtractor, C> {
    StudyProcessor::new(
        FirstSeriesSelector,
        SyntheticExtractor,
        classifier,
        StudyAggregator::with_defaults(),
        ActiveStudyRegistry::new(),
        EventDispatcher::new(),
        budget,
    )
}

// ---- Tests ----

#[test]
fn clean_study_completes_with_success_status() {
    let p = processor(ScriptedClassifier::constant(0.8), Duration::from_secs(600));
    let result = p
        .process_study(&manifest("1.2.3", 40), &CancellationToken::new())
        .unwrap();

    assert_eq!(result.processing_status, ProcessingStatus::Success);
    assert_eq!(result.pathology, 1);
    assert_eq!(result.n_frames, 40);
    assert!(result.time_of_processing >= 0.0);
    assert!(!p.registry().is_active("1.2.3"));
}

#[test]
fn corrupt_frames_downgrade_to_partial() {
    let classifier = ScriptedClassifier {
        probability: 0.8,
        fail_every: Some(4),
        delay: Duration::ZERO,
    };
    let p = processor(classifier, Duration::from_secs(600));
    let result = p
        .process_study(&manifest("1.2.3", 40), &CancellationToken::new())
        .unwrap();

    assert_eq!(result.processing_status, ProcessingStatus::Partial);
    // 10 of 40 frames failed; the verdict covers the survivors.
    assert_eq!(result.n_frames, 30);
    assert_eq!(result.pathology, 1);
}

#[test]
fn all_frames_failing_is_upstream_incomplete() {
    let p = processor(FailingClassifier, Duration::from_secs(600));
    let err = p
        .process_study(&manifest("1.2.3", 10), &CancellationToken::new())
        .unwrap_err();

    match err {
        ProcessingError::UpstreamIncomplete {
            expected,
            classified,
            ..
        } => {
            assert_eq!(expected, 10);
            assert_eq!(classified, 0);
        }
        other => panic!("expected UpstreamIncomplete, got {other:?}"),
    }
    // The registry entry is released even on failure.
    assert!(!p.registry().is_active("1.2.3"));
}

#[test]
fn cancellation_discards_in_flight_study() {
    let p = processor(ScriptedClassifier::constant(0.8), Duration::from_secs(600));
    let token = CancellationToken::new();
    token.cancel();

    let err = p
        .process_study(&manifest("1.2.3", 10), &token)
        .unwrap_err();
    assert!(matches!(err, ProcessingError::Cancelled));
    assert!(!p.registry().is_active("1.2.3"));
}

#[test]
fn exhausted_budget_times_out() {
    let classifier = ScriptedClassifier {
        probability: 0.8,
        fail_every: None,
        delay: Duration::from_millis(20),
    };
    let p = processor(classifier, Duration::from_millis(1));
    let err = p
        .process_study(&manifest("1.2.3", 50), &CancellationToken::new())
        .unwrap_err();
    assert!(matches!(err, ProcessingError::Timeout { budget_secs: 0 }));
}

#[test]
fn duplicate_in_flight_study_is_rejected() {
    let p = processor(ScriptedClassifier::constant(0.5), Duration::from_secs(600));
    let _held = p.registry().begin("1.2.3").unwrap();

    let err = p
        .process_study(&manifest("1.2.3", 5), &CancellationToken::new())
        .unwrap_err();
    assert!(matches!(err, ProcessingError::StudyAlreadyActive { .. }));
}

#[test]
fn skipped_frames_are_reported_through_events() {
    struct SkipCounter {
        skipped: AtomicUsize,
    }

    impl StudyEventHandler for SkipCounter {
        fn on_frame_skipped(&self, _event: &FrameSkippedEvent) {
            self.skipped.fetch_add(1, Ordering::SeqCst);
        }
    }

    let counter = Arc::new(SkipCounter {
        skipped: AtomicUsize::new(0),
    });
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(counter.clone());

    let classifier = ScriptedClassifier {
        probability: 0.8,
        fail_every: Some(5),
        delay: Duration::ZERO,
    };
    let p = StudyProcessor::new(
        FirstSeriesSelector,
        SyntheticExtractor,
        classifier,
        StudyAggregator::with_defaults(),
        ActiveStudyRegistry::new(),
        dispatcher,
        Duration::from_secs(600),
    );

    p.process_study(&manifest("1.2.3", 20), &CancellationToken::new())
        .unwrap();
    assert_eq!(counter.skipped.load(Ordering::SeqCst), 4);
}

#[test]
fn batch_processes_independent_studies() {
    let p = processor(ScriptedClassifier::constant(0.7), Duration::from_secs(600));
    let manifests: Vec<StudyManifest> =
        (0..8).map(|i| manifest(&format!("1.2.{i}"), 20)).collect();

    let results = p.process_batch(&manifests, &CancellationToken::new());
    assert_eq!(results.len(), 8);
    for (i, result) in results.iter().enumerate() {
        let result = result.as_ref().unwrap();
        assert_eq!(result.study_uid, format!("1.2.{i}"));
        assert_eq!(result.pathology, 1);
    }
    assert_eq!(p.registry().active_count(), 0);
}
