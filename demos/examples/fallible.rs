//! Fallible callables and configuration discovery
//!
//! Errors returned by the timed callable abort the measurement and come back
//! unchanged. Defaults can come from a `basicbench.toml` found in the current
//! directory or any parent.
//!
//! Run with: cargo run --example fallible -p basicbench-demos --release

use basicbench::{BenchConfig, discovered_options, try_benchmark_stats};

fn parse_all(input: &str) -> Result<Vec<u32>, std::num::ParseIntError> {
    input.split(',').map(|s| s.trim().parse()).collect()
}

fn main() -> anyhow::Result<()> {
    basicbench_demos::init_logging(true);

    let options = discovered_options().n_runs(200).name("parse_all");

    let parsed = try_benchmark_stats(|| parse_all("1, 2, 3, 5, 8, 13"), &options)?;
    println!("  -> {:?}\n", parsed.return_value);

    match try_benchmark_stats(|| parse_all("1, two, 3"), &options) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("measurement aborted: {e}\n"),
    }

    tracing::info!("default configuration follows");
    println!("Default basicbench.toml:\n{}", BenchConfig::default_toml());
    Ok(())
}
