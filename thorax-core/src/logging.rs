//! Tracing setup.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber from the logging config.
///
/// The `THORAX_LOG` environment variable takes precedence over the
/// configured level. Safe to call more than once; only the first call
/// installs a subscriber.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_env("THORAX_LOG")
        .unwrap_or_else(|_| EnvFilter::new(config.effective_level()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
