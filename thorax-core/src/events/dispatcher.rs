//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::StudyEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates over an empty Vec,
/// effectively zero cost.
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn StudyEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn StudyEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// Handlers that panic are isolated and do not prevent subsequent
    /// handlers from receiving the event.
    fn emit<F: Fn(&dyn StudyEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    pub fn emit_study_started(&self, event: &StudyStartedEvent) {
        self.emit(|h| h.on_study_started(event));
    }

    pub fn emit_frame_skipped(&self, event: &FrameSkippedEvent) {
        self.emit(|h| h.on_frame_skipped(event));
    }

    pub fn emit_study_completed(&self, event: &StudyCompletedEvent) {
        self.emit(|h| h.on_study_completed(event));
    }

    pub fn emit_study_failed(&self, event: &StudyFailedEvent) {
        self.emit(|h| h.on_study_failed(event));
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
