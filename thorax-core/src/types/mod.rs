//! Shared data model for the triage pipeline.

pub mod collections;
pub mod frame;
pub mod study;

pub use frame::{FrameImage, FrameLocator, FrameResult, SpatialCoords};
pub use study::{
    BoundingBox, ProcessingStatus, SeriesDescriptor, StudyManifest, StudyResult,
};
