//! Confidence interval estimation for the study-level probability.

pub mod normal;

pub use normal::{confidence_interval, sample_mean, z_value};
