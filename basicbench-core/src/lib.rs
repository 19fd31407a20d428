#![warn(missing_docs)]
//! basicbench Core - Run-and-Time Engine
//!
//! This crate executes a callable repeatedly and measures it:
//! - Monotonic `Timer` built on `std::time::Instant`
//! - Auto-ranging of the run count (1, 2, 5, 10, 20, 50, ...)
//! - `benchmark` for the mean time only
//! - `benchmark_stats` / `try_benchmark_stats` for mean, stdev, min, max and
//!   the callable's last return value
//!
//! Everything runs synchronously on the calling thread.

mod measure;
mod options;
mod runner;

pub use measure::{Timer, time_call, time_loop};
pub use options::{BenchOptions, DEFAULT_MIN_TIME, callable_name};
pub use runner::{
    AutoRange, BenchmarkResult, autorange, benchmark, benchmark_stats, benchmark_stats_named,
    try_benchmark_stats,
};
