//! # Thorax Analysis
//!
//! Study-level aggregation for chest-CT triage: turns a stream of
//! per-frame pathology probabilities into one per-study verdict with a
//! confidence interval, severity ranking, and bounding-volume
//! localization.
//!
//! ## Quick Start
//!
//! ```
//! use thorax_analysis::aggregation::{AggregationConfig, StudyAggregator};
//! use thorax_core::types::FrameResult;
//!
//! let aggregator = StudyAggregator::new(AggregationConfig::default())?;
//! let frames: Vec<FrameResult> = (0..100)
//!     .map(|i| FrameResult::new("1.2.3.1", i, if i < 15 { 0.7 } else { 0.1 }))
//!     .collect();
//!
//! let result = aggregator.aggregate("1.2.3", "1.2.3.1", &frames)?;
//! assert_eq!(result.pathology, 1);
//! # Ok::<(), thorax_core::errors::AggregationError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Frame probabilities -> Validation -> Positive-fraction gating
//!     -> Study probability -> Confidence interval
//!     -> Severity + Localization -> StudyResult
//! ```
//!
//! The [`orchestrator`] module drives the full per-study pipeline over
//! the capability interfaces (series selection, frame extraction,
//! classification) with partial-failure, cancellation, and budget
//! semantics.

pub mod aggregation;
pub mod confidence;
pub mod orchestrator;

// Re-export main types
pub use aggregation::{AggregationConfig, StudyAggregator};
pub use orchestrator::{ActiveStudyRegistry, StudyProcessor};
