//! Event payload types for the study processing lifecycle.

use crate::types::ProcessingStatus;

/// Payload for `on_study_started`.
#[derive(Debug, Clone)]
pub struct StudyStartedEvent {
    pub study_uid: String,
    pub series_uid: String,
    pub frame_count: u32,
}

/// Payload for `on_frame_skipped`.
/// Emitted once per frame the classifier failed on.
#[derive(Debug, Clone)]
pub struct FrameSkippedEvent {
    pub study_uid: String,
    pub series_uid: String,
    pub frame_index: u32,
    pub message: String,
}

/// Payload for `on_study_completed`.
#[derive(Debug, Clone)]
pub struct StudyCompletedEvent {
    pub study_uid: String,
    pub status: ProcessingStatus,
    pub pathology: u8,
    pub duration_ms: u64,
}

/// Payload for `on_study_failed`.
#[derive(Debug, Clone)]
pub struct StudyFailedEvent {
    pub study_uid: String,
    pub message: String,
    pub error_code: String,
}
