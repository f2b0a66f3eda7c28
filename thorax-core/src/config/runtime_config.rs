//! Runtime configuration: worker pool and per-study budget.

use serde::{Deserialize, Serialize};

/// Configuration for the orchestration layer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Worker threads for batch study processing. Default: all cores
    /// (rayon's default pool).
    pub worker_threads: Option<usize>,
    /// End-to-end budget per study, in seconds. Default: 600.
    pub study_budget_secs: Option<u64>,
}

impl RuntimeConfig {
    /// Returns the effective per-study budget, defaulting to 600 seconds.
    pub fn effective_study_budget_secs(&self) -> u64 {
        self.study_budget_secs.unwrap_or(600)
    }
}
