//! Normal-approximation interval via the `statrs` crate.
//!
//! The interval is computed over the same probability sample the study
//! statistic is computed from, so the reported mean always lies inside
//! it. Samples with fewer than two frames or zero spread degenerate to
//! the point estimate.

use statrs::distribution::{ContinuousCDF, Normal};

/// Mean of a probability sample.
///
/// Returns 0.0 for an empty sample; callers validate non-emptiness
/// before reaching this point.
pub fn sample_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unbiased sample variance (n - 1 denominator).
fn sample_variance(values: &[f64], mean: f64) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    let var = sum_sq / (n as f64 - 1.0);
    if var.is_finite() {
        var.max(0.0)
    } else {
        0.0
    }
}

/// Two-sided standard normal quantile for a confidence level.
///
/// `level` = 0.95 yields z ≈ 1.96. Guards against degenerate levels:
/// level <= 0 collapses to 0 (point interval), level >= 1 yields an
/// infinite quantile which the caller's clamp turns into [0, 1].
pub fn z_value(level: f64) -> f64 {
    if !level.is_finite() || level <= 0.0 {
        return 0.0;
    }
    if level >= 1.0 {
        return f64::INFINITY;
    }
    let tail = (1.0 - level) / 2.0;
    match Normal::new(0.0, 1.0) {
        Ok(dist) => dist.inverse_cdf(1.0 - tail),
        Err(_) => 0.0,
    }
}

/// Compute the two-sided confidence interval for the mean of a
/// probability sample, clipped to [0.0, 1.0].
///
/// Returns (low, high) with low <= mean <= high. Deterministic given
/// the same sample and level.
pub fn confidence_interval(values: &[f64], level: f64) -> (f64, f64) {
    let mean = sample_mean(values).clamp(0.0, 1.0);
    if values.len() < 2 {
        return (mean, mean);
    }

    let variance = sample_variance(values, mean);
    if variance <= 0.0 {
        return (mean, mean);
    }

    let se = (variance / values.len() as f64).sqrt();
    let half_width = z_value(level) * se;
    if !half_width.is_finite() {
        return (0.0, 1.0);
    }

    let low = (mean - half_width).clamp(0.0, 1.0);
    let high = (mean + half_width).clamp(0.0, 1.0);
    (low, high)
}
