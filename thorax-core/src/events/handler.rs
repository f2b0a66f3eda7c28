//! Event handler trait with no-op defaults.

use super::types::*;

/// Receives study lifecycle events.
///
/// All methods default to no-ops so handlers implement only what they
/// observe. Handlers must not block: dispatch is synchronous on the
/// processing thread.
pub trait StudyEventHandler: Send + Sync {
    fn on_study_started(&self, _event: &StudyStartedEvent) {}
    fn on_frame_skipped(&self, _event: &FrameSkippedEvent) {}
    fn on_study_completed(&self, _event: &StudyCompletedEvent) {}
    fn on_study_failed(&self, _event: &StudyFailedEvent) {}
}
