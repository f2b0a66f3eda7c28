//! thorax-core: shared foundation for the Thorax study triage engine.
//!
//! This crate provides everything the analysis crate builds on:
//! - Types: frame and study records exchanged with external collaborators
//! - Errors: one enum per subsystem, stable error codes
//! - Config: layered TOML/env resolution, validated at startup
//! - Traits: cancellation and the capability interfaces (series
//!   selection, frame extraction, frame classification)
//! - Events: synchronous study lifecycle dispatch
//! - Logging: tracing subscriber setup

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::{AggregatorConfig, LoggingConfig, RuntimeConfig, ThoraxConfig};
pub use errors::{AggregationError, ConfigError, ProcessingError, ThoraxErrorCode};
pub use events::{EventDispatcher, StudyEventHandler};
pub use traits::{Cancellable, CancellationToken, FrameClassifier, FrameExtractor, SeriesSelector};
pub use types::{
    BoundingBox, FrameImage, FrameLocator, FrameResult, ProcessingStatus, SeriesDescriptor,
    SpatialCoords, StudyManifest, StudyResult,
};
