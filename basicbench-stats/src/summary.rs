//! Summary Statistics
//!
//! Computes the descriptive statistics reported for a benchmark:
//! - Mean over every recorded run
//! - Standard deviation, min and max only when there is a spread to describe
//!
//! A single run has no spread, so stdev/min/max are `None` for it.

use crate::MIN_SPREAD_SAMPLES;
use serde::{Deserialize, Serialize};

/// Descriptive statistics of per-run elapsed times, all in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Mean elapsed time per run
    pub mean: f64,
    /// Sample standard deviation (absent below two runs)
    pub std_dev: Option<f64>,
    /// Fastest run (absent below two runs)
    pub min: Option<f64>,
    /// Slowest run (absent below two runs)
    pub max: Option<f64>,
    /// Number of runs the statistics were computed from
    pub sample_count: usize,
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        None
    } else {
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }
}

/// Sample standard deviation with the n - 1 denominator
///
/// Returns `None` when fewer than two samples are given.
pub fn sample_std_dev(samples: &[f64]) -> Option<f64> {
    if samples.len() < MIN_SPREAD_SAMPLES {
        return None;
    }
    let mean = mean(samples)?;
    let variance =
        samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Compute summary statistics for a set of per-run timings
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    let Some(mean) = mean(samples) else {
        return SummaryStatistics {
            mean: 0.0,
            std_dev: None,
            min: None,
            max: None,
            sample_count: 0,
        };
    };

    let (min, max) = if samples.len() < MIN_SPREAD_SAMPLES {
        (None, None)
    } else {
        let min = samples
            .iter()
            .copied()
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let max = samples
            .iter()
            .copied()
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        (min, max)
    };

    SummaryStatistics {
        mean,
        std_dev: sample_std_dev(samples),
        min,
        max,
        sample_count: samples.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_summary() {
        let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let summary = compute_summary(&samples);

        assert!((summary.mean - 3.0).abs() < 1e-12);
        assert_eq!(summary.min, Some(1.0));
        assert_eq!(summary.max, Some(5.0));
        assert_eq!(summary.sample_count, 5);
    }

    #[test]
    fn test_sample_std_dev_uses_n_minus_one() {
        // Sum of squared deviations is 10, divided by 4
        let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let std_dev = sample_std_dev(&samples).unwrap();
        assert!((std_dev - 2.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample_has_no_spread() {
        let summary = compute_summary(&[0.25]);

        assert!((summary.mean - 0.25).abs() < f64::EPSILON);
        assert_eq!(summary.std_dev, None);
        assert_eq!(summary.min, None);
        assert_eq!(summary.max, None);
        assert_eq!(summary.sample_count, 1);
    }

    #[test]
    fn test_two_samples() {
        let summary = compute_summary(&[0.002, 0.004]);

        assert!((summary.mean - 0.003).abs() < 1e-12);
        assert_eq!(summary.min, Some(0.002));
        assert_eq!(summary.max, Some(0.004));
        assert!(summary.std_dev.is_some());
    }

    #[test]
    fn test_empty_samples() {
        let summary = compute_summary(&[]);

        assert_eq!(summary.sample_count, 0);
        assert!((summary.mean - 0.0).abs() < f64::EPSILON);
        assert_eq!(summary.std_dev, None);
    }

    #[test]
    fn test_min_le_mean_le_max() {
        let samples = vec![3.0e-6, 1.0e-6, 7.0e-6, 2.0e-6];
        let summary = compute_summary(&samples);

        let (min, max) = (summary.min.unwrap(), summary.max.unwrap());
        assert!(min <= summary.mean);
        assert!(summary.mean <= max);
    }
}
