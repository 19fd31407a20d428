#![warn(missing_docs)]
//! basicbench Report - Human-Readable Timing Output
//!
//! Turns raw durations in seconds into something a person can read:
//! - Display units (s, ms, µs, ns) and the display-time formatter
//! - The one-line (or two-line) benchmark summary printed to the console
//! - Thousands grouping for run counts

mod display;
mod error;
mod printer;

pub use display::{DisplayTime, TimeUnit, seconds_to_display_time};
pub use error::UnitError;
pub use printer::{format_time_benchmark, group_thousands};
