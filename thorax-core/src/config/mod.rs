//! Configuration system for Thorax.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod aggregator_config;
pub mod logging_config;
pub mod runtime_config;
pub mod thorax_config;

pub use aggregator_config::AggregatorConfig;
pub use logging_config::LoggingConfig;
pub use runtime_config::RuntimeConfig;
pub use thorax_config::ThoraxConfig;
