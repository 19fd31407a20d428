//! Decorators: instrumenting functions inline
//!
//! Run with: cargo run --example decorators -p basicbench-demos --release

use basicbench::{basicbenchmark, wrap};

// ---------------------------------------------------------------------------
// Attribute form
// ---------------------------------------------------------------------------

/// Bare: one timed run per call.
#[basicbenchmark]
fn add(x: i32, y: i32) -> i32 {
    x + y
}

/// Parameterized: ten timed runs after an untimed warm-up.
#[basicbenchmark(n_runs = 10, pre_run = true)]
fn word_count(text: String) -> usize {
    text.split_whitespace().count()
}

/// Auto-ranged on every call.
#[basicbenchmark(autorange = true, min_time = "50ms")]
fn checksum(data: Vec<u8>) -> u32 {
    data.iter().fold(0u32, |acc, &b| acc.rotate_left(5) ^ b as u32)
}

fn main() {
    basicbench_demos::init_logging(false);

    println!("add(1, 2) = {}\n", add(1, 2));
    println!("words = {}\n", word_count("the quick brown fox ".repeat(100)));
    println!("checksum = {:#x}\n", checksum((0..=255).collect()));

    // -----------------------------------------------------------------------
    // Function form
    // -----------------------------------------------------------------------

    let mut sort = wrap(|mut v: Vec<u32>| {
        v.sort_unstable();
        v.len()
    })
    .named("sort_unstable");
    let input: Vec<u32> = (0..10_000).rev().collect();
    println!("sorted {} items\n", sort.call(input.clone()));

    let decorator = basicbenchmark().n_runs(100).pre_run(true);
    let mut sorted = decorator
        .wrap(|mut v: Vec<u32>| {
            v.sort();
            v.len()
        })
        .named("sort");
    let mut dedup = decorator
        .wrap(|mut v: Vec<u32>| {
            v.dedup();
            v.len()
        })
        .named("dedup");
    sorted.call(input.clone());
    dedup.call(input);
}
