//! Orchestration layer: in-flight registry and the per-study pipeline
//! driver.

pub mod processor;
pub mod registry;

pub use processor::StudyProcessor;
pub use registry::{ActiveStudyGuard, ActiveStudyRegistry};
