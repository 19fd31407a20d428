#![warn(missing_docs)]
//! basicbench Statistical Engine
//!
//! Descriptive statistics over per-run elapsed times:
//! - Arithmetic mean
//! - Sample standard deviation (n - 1 denominator)
//! - Fastest and slowest run
//!
//! Statistics that are not meaningful for the sample size are reported as
//! `None` rather than as zero or NaN.

mod summary;

pub use summary::{SummaryStatistics, compute_summary, mean, sample_std_dev};

/// Minimum number of samples for which spread statistics are reported
pub const MIN_SPREAD_SAMPLES: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MIN_SPREAD_SAMPLES, 2);
    }
}
