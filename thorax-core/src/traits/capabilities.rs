//! Capability interfaces for the external preprocessing and inference
//! collaborators.
//!
//! DICOM parsing, windowing, series selection, and the frame classifier
//! live outside this engine. The orchestration layer talks to them only
//! through these traits, so the pipeline stays testable with stubs.

use crate::errors::ProcessingError;
use crate::types::{FrameImage, FrameResult, StudyManifest};

/// Picks the series to analyze for a study.
///
/// A chest-CT study usually carries several reconstructions; which one
/// is optimal (kernel, slice thickness, lung window) is a preprocessing
/// decision, not an aggregation one.
pub trait SeriesSelector {
    fn select_series(&self, study: &StudyManifest) -> Result<String, ProcessingError>;
}

/// Extracts windowed pixel frames from a series.
///
/// Multi-frame DICOM files contribute one `FrameImage` per slice.
pub trait FrameExtractor {
    fn extract_frames(
        &self,
        study: &StudyManifest,
        series_uid: &str,
    ) -> Result<Vec<FrameImage>, ProcessingError>;
}

/// The opaque frame-level classifier.
///
/// Returns one `FrameResult` per frame with a probability in [0, 1].
/// A per-frame failure (corrupt slice, inference error) is reported as
/// `ProcessingError::Classifier`; the orchestrator treats it as
/// non-fatal and downgrades the study to partial.
pub trait FrameClassifier {
    fn classify(&self, frame: &FrameImage) -> Result<FrameResult, ProcessingError>;
}
