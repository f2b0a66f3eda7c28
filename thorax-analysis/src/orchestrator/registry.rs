//! In-flight study registry.
//!
//! The explicit, injectable replacement for a process-wide table of
//! active uploads: a concurrent set of study uids currently being
//! processed. Entries are removed by a drop guard so no exit path can
//! leak one.

use std::sync::{Arc, Mutex};

use thorax_core::types::collections::FxHashSet;

/// Concurrent set of in-flight study uids.
#[derive(Debug, Clone, Default)]
pub struct ActiveStudyRegistry {
    inner: Arc<Mutex<FxHashSet<String>>>,
}

impl ActiveStudyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a study as in-flight.
    ///
    /// Returns `None` when the study is already being processed; the
    /// caller rejects the duplicate rather than racing it.
    pub fn begin(&self, study_uid: &str) -> Option<ActiveStudyGuard> {
        let mut active = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if !active.insert(study_uid.to_string()) {
            return None;
        }
        Some(ActiveStudyGuard {
            registry: self.clone(),
            study_uid: study_uid.to_string(),
        })
    }

    /// Whether a study is currently in flight.
    pub fn is_active(&self, study_uid: &str) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .contains(study_uid)
    }

    /// Number of studies currently in flight.
    pub fn active_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    fn complete(&self, study_uid: &str) {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(study_uid);
    }
}

/// Removes the registry entry when dropped.
#[must_use = "dropping the guard immediately unregisters the study"]
pub struct ActiveStudyGuard {
    registry: ActiveStudyRegistry,
    study_uid: String,
}

impl Drop for ActiveStudyGuard {
    fn drop(&mut self) {
        self.registry.complete(&self.study_uid);
    }
}
