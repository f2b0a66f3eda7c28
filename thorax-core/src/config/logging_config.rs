//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Configuration for tracing output.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "thorax_analysis=debug".
    /// The `THORAX_LOG` environment variable overrides it. Default: "info".
    pub level: Option<String>,
}

impl LoggingConfig {
    /// Returns the effective filter directive, defaulting to "info".
    pub fn effective_level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }
}
