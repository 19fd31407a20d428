//! basicbench Examples
//!
//! Runnable demonstrations of every basicbench feature. This crate is not
//! published; it exists solely to host examples that depend on `basicbench`.
//!
//! Run any example with:
//! ```sh
//! cargo run --example <name> -p basicbench-demos --release
//! ```
//!
//! | Example | Feature |
//! |---------|---------|
//! | `quickstart` | `benchmark()`, `benchmark_stats()`, auto-ranging |
//! | `decorators` | `wrap()`, `basicbenchmark()` and `#[basicbenchmark]` |
//! | `fallible` | `try_benchmark_stats()` and `basicbench.toml` discovery |

/// Install a `tracing` subscriber honoring `RUST_LOG` (default: info level)
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        "basicbench=debug,basicbench_core=debug"
    } else {
        "basicbench=info,basicbench_core=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
