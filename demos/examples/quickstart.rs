//! Quickstart: mean time, full statistics and auto-ranging
//!
//! Run with: cargo run --example quickstart -p basicbench-demos --release

use basicbench::prelude::*;
use std::hint::black_box;

fn fibonacci(n: u64) -> u64 {
    match n {
        0 | 1 => n,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}

fn main() {
    basicbench_demos::init_logging(std::env::args().any(|a| a == "--verbose"));

    // Auto-ranged: probes 1, 2, 5, 10, ... runs until a round lasts 200ms
    let mean = benchmark(
        || fibonacci(black_box(20)),
        &BenchOptions::new().name("fibonacci"),
    );
    println!("  -> {mean:.3e} s per run\n");

    // Fixed run count with a warm-up call, per-run statistics
    let result = benchmark_stats(
        || fibonacci(black_box(25)),
        &BenchOptions::new().n_runs(50).pre_run(true).name("fibonacci"),
    );
    println!("  -> returned {}\n", result.return_value);

    // One run: no spread to report
    let single = benchmark_stats(
        || (0..1_000_000u64).map(black_box).sum::<u64>(),
        &BenchOptions::new().n_runs(1).name("sum"),
    );
    assert!(single.stdev.is_none() && single.min.is_none() && single.max.is_none());

    // Silent run, formatted by hand with a forced unit
    let quiet = benchmark_stats(
        || fibonacci(black_box(15)),
        &BenchOptions::new().n_runs(1_000).quiet(),
    );
    match basicbench::seconds_to_display_time(quiet.mean, Some("us")) {
        Ok(t) => println!("fibonacci(15): {t}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}
