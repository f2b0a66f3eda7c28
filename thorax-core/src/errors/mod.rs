//! Error handling for Thorax.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod aggregation_error;
pub mod config_error;
pub mod error_code;
pub mod processing_error;

pub use aggregation_error::AggregationError;
pub use config_error::ConfigError;
pub use error_code::ThoraxErrorCode;
pub use processing_error::ProcessingError;
