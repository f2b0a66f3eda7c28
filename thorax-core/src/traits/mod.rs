//! Traits at the seams of the pipeline: cancellation and the
//! capability interfaces implemented by external collaborators.

pub mod cancellation;
pub mod capabilities;

pub use cancellation::{Cancellable, CancellationToken};
pub use capabilities::{FrameClassifier, FrameExtractor, SeriesSelector};
