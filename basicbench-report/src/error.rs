//! Formatter errors

use thiserror::Error;

/// Errors raised while converting durations to display units
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// A forced unit outside of s, ms, µs, us, ns
    #[error("Invalid time unit: {0:?} (must be one of \"s\", \"ms\", \"µs\", \"us\", \"ns\")")]
    InvalidUnit(String),
}
