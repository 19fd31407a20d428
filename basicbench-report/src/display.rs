//! Display Units
//!
//! Converts a duration in seconds into the largest unit whose magnitude is at
//! least one, or into a caller-forced unit.

use crate::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time unit used for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Seconds
    #[serde(rename = "s")]
    Seconds,
    /// Milliseconds
    #[serde(rename = "ms")]
    Millis,
    /// Microseconds
    #[serde(rename = "µs", alias = "us")]
    Micros,
    /// Nanoseconds
    #[serde(rename = "ns")]
    Nanos,
}

impl TimeUnit {
    /// Units ordered from largest to smallest
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Seconds,
        TimeUnit::Millis,
        TimeUnit::Micros,
        TimeUnit::Nanos,
    ];

    /// Length of one unit in seconds
    pub fn factor_to_seconds(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Millis => 1e-3,
            TimeUnit::Micros => 1e-6,
            TimeUnit::Nanos => 1e-9,
        }
    }

    /// Unit label as printed
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Millis => "ms",
            TimeUnit::Micros => "µs",
            TimeUnit::Nanos => "ns",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(TimeUnit::Seconds),
            "ms" => Ok(TimeUnit::Millis),
            "µs" | "us" => Ok(TimeUnit::Micros),
            "ns" => Ok(TimeUnit::Nanos),
            other => Err(UnitError::InvalidUnit(other.to_string())),
        }
    }
}

/// A duration scaled into a display unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTime {
    /// Duration expressed in `unit`
    pub magnitude: f64,
    /// Unit of `magnitude`
    pub unit: TimeUnit,
}

impl DisplayTime {
    /// Pick the largest unit in which `seconds` is at least 1.
    ///
    /// Falls back to nanoseconds for anything smaller than 1 ns, zero included.
    pub fn auto(seconds: f64) -> Self {
        for unit in TimeUnit::ALL {
            let factor = unit.factor_to_seconds();
            if seconds >= factor {
                return Self::in_unit(seconds, unit);
            }
        }
        Self::in_unit(seconds, TimeUnit::Nanos)
    }

    /// Express `seconds` in `unit`, whatever the magnitude
    pub fn in_unit(seconds: f64, unit: TimeUnit) -> Self {
        Self {
            magnitude: seconds / unit.factor_to_seconds(),
            unit,
        }
    }
}

impl fmt::Display for DisplayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.magnitude, self.unit)
    }
}

/// Convert seconds into a `(magnitude, unit)` pair for display.
///
/// `force_unit` must be one of `"s"`, `"ms"`, `"µs"`, `"us"` or `"ns"`; any
/// other value is rejected with [`UnitError::InvalidUnit`].
pub fn seconds_to_display_time(
    seconds: f64,
    force_unit: Option<&str>,
) -> Result<DisplayTime, UnitError> {
    match force_unit {
        Some(unit) => Ok(DisplayTime::in_unit(seconds, unit.parse()?)),
        None => Ok(DisplayTime::auto(seconds)),
    }
}
