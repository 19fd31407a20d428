//! Benchmark Options

use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use std::time::Duration;

/// Default auto-ranging threshold: a probing round must last at least this long
pub const DEFAULT_MIN_TIME: Duration = Duration::from_millis(200);

/// Options shared by every timing entry point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchOptions {
    /// Number of timed runs; `None` (or zero) auto-ranges the count
    pub n_runs: Option<u64>,
    /// Call the target once, untimed, before measuring
    pub pre_run: bool,
    /// Print the summary line to stdout
    pub print_result: bool,
    /// Minimum duration of the auto-ranging round that fixes the run count
    pub min_time: Duration,
    /// Name used in the summary line instead of the callable's type name
    pub name: Option<String>,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            n_runs: None,
            pre_run: false,
            print_result: true,
            min_time: DEFAULT_MIN_TIME,
            name: None,
        }
    }
}

impl BenchOptions {
    /// Options with all defaults: auto-ranged, no warm-up, printing on
    pub fn new() -> Self {
        Self::default()
    }

    /// Run exactly `n` times (`0` means auto-range)
    pub fn n_runs(mut self, n: u64) -> Self {
        self.n_runs = Some(n);
        self
    }

    /// Determine the run count by probing
    pub fn autorange(mut self) -> Self {
        self.n_runs = None;
        self
    }

    /// Enable or disable the untimed warm-up call
    pub fn pre_run(mut self, pre_run: bool) -> Self {
        self.pre_run = pre_run;
        self
    }

    /// Enable or disable printing
    pub fn print_result(mut self, print_result: bool) -> Self {
        self.print_result = print_result;
        self
    }

    /// Disable printing
    pub fn quiet(self) -> Self {
        self.print_result(false)
    }

    /// Auto-ranging threshold
    pub fn min_time(mut self, min_time: Duration) -> Self {
        self.min_time = min_time;
        self
    }

    /// Display name for the summary line
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Fixed run count, if one was requested
    pub fn fixed_runs(&self) -> Option<NonZeroU64> {
        self.n_runs.and_then(NonZeroU64::new)
    }
}

/// Derive a display name from a callable's type.
///
/// Uses the last path segment of [`std::any::type_name`], skipping closure
/// segments so a closure is named after its enclosing function.
pub fn callable_name<F: ?Sized>() -> String {
    short_name(std::any::type_name::<F>())
}

fn short_name(type_path: &str) -> String {
    let path = strip_generics(type_path);
    path.rsplit("::")
        .map(str::trim)
        .find(|segment| !segment.is_empty() && !segment.starts_with("{{"))
        .unwrap_or("<anonymous>")
        .to_string()
}

/// Drop every `<...>` group, including qualified-self prefixes like `<T as Trait>`
fn strip_generics(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut depth = 0usize;
    let mut prev = None;
    for c in path.chars() {
        match c {
            '<' => depth += 1,
            // `->` inside a fn-pointer argument is not a closing bracket
            '>' if prev != Some('-') && depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
        prev = Some(c);
    }
    out
}
