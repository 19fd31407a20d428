#![warn(missing_docs)]
//! # basicbench
//!
//! Lightweight timing of Rust callables with basic statistics.
//!
//! - **Mean only**: [`benchmark`] times a loop and returns seconds per run
//! - **Statistics**: [`benchmark_stats`] returns mean, standard deviation,
//!   fastest and slowest run along with the callable's last return value
//! - **Auto-ranging**: without a run count, probes 1, 2, 5, 10, ... runs until
//!   one round lasts at least 200 ms
//! - **Decorators**: [`wrap`], [`basicbenchmark()`] and the
//!   `#[basicbenchmark]` attribute time every call inline
//! - **Readable units**: results are printed in s, ms, µs or ns
//!
//! ## Quick Start
//!
//! ```ignore
//! use basicbench::prelude::*;
//!
//! let mean = benchmark(|| expensive_operation(), &BenchOptions::new());
//!
//! let result = benchmark_stats(|| parse("1,2,3"), &BenchOptions::new().n_runs(100));
//! assert_eq!(result.return_value, vec![1, 2, 3]);
//! ```
//!
//! ## Decorators
//!
//! ```ignore
//! #[basicbenchmark]
//! fn add(x: i32, y: i32) -> i32 {
//!     x + y
//! }
//!
//! #[basicbenchmark(n_runs = 10, pre_run = true)]
//! fn checksum(data: Vec<u8>) -> u32 {
//!     data.iter().map(|&b| b as u32).sum()
//! }
//!
//! assert_eq!(add(1, 2), 3); // prints "add: 1 runs, mean time per run: ..."
//! ```

mod config;
mod decorator;

pub use config::{BenchConfig, CONFIG_FILE_NAME, RunnerConfig};
pub use decorator::{Benchmarked, Decorator, basicbenchmark, wrap};

// Re-export core types
pub use basicbench_core::{
    AutoRange, BenchOptions, BenchmarkResult, DEFAULT_MIN_TIME, Timer, autorange, benchmark,
    benchmark_stats, benchmark_stats_named, callable_name, try_benchmark_stats,
};

// Re-export the attribute macro (macro namespace, alongside `basicbenchmark()`)
pub use basicbench_macros::basicbenchmark;

// Re-export formatting
pub use basicbench_report::{
    DisplayTime, TimeUnit, UnitError, format_time_benchmark, group_thousands,
    seconds_to_display_time,
};

// Re-export stats
pub use basicbench_stats::{SummaryStatistics, compute_summary};

/// Options taken from `basicbench.toml` when one is found, defaults otherwise
pub fn discovered_options() -> BenchOptions {
    BenchConfig::discover()
        .map(|config| BenchOptions::from(&config))
        .unwrap_or_default()
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BenchOptions, BenchmarkResult, basicbenchmark, benchmark, benchmark_stats,
        try_benchmark_stats, wrap,
    };
}
