//! Lifecycle events for study processing.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::StudyEventHandler;
pub use types::{
    FrameSkippedEvent, StudyCompletedEvent, StudyFailedEvent, StudyStartedEvent,
};
