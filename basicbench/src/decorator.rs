//! Decorator Wrapper
//!
//! Wraps a callable so that every call is timed with [`benchmark_stats`]
//! semantics, the summary is printed, and only the callable's own return value
//! reaches the caller.
//!
//! Two entry points mirror bare and parameterized decoration:
//! - [`wrap`] applies the default configuration (one timed run per call)
//! - [`basicbenchmark`] returns a [`Decorator`] to configure before wrapping
//!
//! [`benchmark_stats`]: basicbench_core::benchmark_stats

use basicbench_core::{BenchOptions, BenchmarkResult, benchmark_stats_named, callable_name};
use std::time::Duration;

/// Wrap `f` with the default decorator configuration
pub fn wrap<F>(f: F) -> Benchmarked<F> {
    Decorator::new().wrap(f)
}

/// Start a configurable decorator
pub fn basicbenchmark() -> Decorator {
    Decorator::new()
}

/// Decorator configuration, reusable across any number of wrapped callables
#[derive(Debug, Clone, PartialEq)]
pub struct Decorator {
    options: BenchOptions,
}

impl Default for Decorator {
    fn default() -> Self {
        Self::new()
    }
}

impl Decorator {
    /// One timed run per call, no warm-up, printing on
    pub fn new() -> Self {
        Self {
            options: BenchOptions::new().n_runs(1),
        }
    }

    /// Use an existing set of options as-is
    pub fn from_options(options: BenchOptions) -> Self {
        Self { options }
    }

    /// Timed runs per call (`0` means auto-range)
    pub fn n_runs(mut self, n: u64) -> Self {
        self.options = self.options.n_runs(n);
        self
    }

    /// Auto-range the run count on every call
    pub fn autorange(mut self) -> Self {
        self.options = self.options.autorange();
        self
    }

    /// Untimed warm-up call before each measurement
    pub fn pre_run(mut self, pre_run: bool) -> Self {
        self.options = self.options.pre_run(pre_run);
        self
    }

    /// Enable or disable printing
    pub fn print_result(mut self, print_result: bool) -> Self {
        self.options = self.options.print_result(print_result);
        self
    }

    /// Disable printing
    pub fn quiet(self) -> Self {
        self.print_result(false)
    }

    /// Auto-ranging threshold
    pub fn min_time(mut self, min_time: Duration) -> Self {
        self.options = self.options.min_time(min_time);
        self
    }

    /// Options applied on every call
    pub fn options(&self) -> &BenchOptions {
        &self.options
    }

    /// Wrap `f`; it is reported under its type name unless renamed
    pub fn wrap<F>(&self, f: F) -> Benchmarked<F> {
        let name = self
            .options
            .name
            .clone()
            .unwrap_or_else(callable_name::<F>);
        Benchmarked {
            name,
            func: f,
            options: self.options.clone(),
        }
    }
}

/// A callable that is benchmarked on every call
#[derive(Debug, Clone)]
pub struct Benchmarked<F> {
    name: String,
    func: F,
    options: BenchOptions,
}

impl<F> Benchmarked<F> {
    /// Report under `name` instead of the callable's type name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Name used in the summary line
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Options applied on every call
    pub fn options(&self) -> &BenchOptions {
        &self.options
    }

    /// Unwrap the original callable
    pub fn into_inner(self) -> F {
        self.func
    }

    /// Call a nullary callable, returning only its output
    pub fn run<R>(&mut self) -> R
    where
        F: FnMut() -> R,
    {
        self.run_with_stats().into_return_value()
    }

    /// Call a nullary callable, returning the full statistics
    pub fn run_with_stats<R>(&mut self) -> BenchmarkResult<R>
    where
        F: FnMut() -> R,
    {
        benchmark_stats_named(&self.name, &mut self.func, &self.options)
    }

    /// Call with `args`, returning only the callable's output
    ///
    /// Every timed run receives its own clone of `args`; pass a tuple for
    /// several arguments.
    pub fn call<A, R>(&mut self, args: A) -> R
    where
        F: FnMut(A) -> R,
        A: Clone,
    {
        self.call_with_stats(args).into_return_value()
    }

    /// Call with `args`, returning the full statistics
    pub fn call_with_stats<A, R>(&mut self, args: A) -> BenchmarkResult<R>
    where
        F: FnMut(A) -> R,
        A: Clone,
    {
        let func = &mut self.func;
        benchmark_stats_named(&self.name, || func(args.clone()), &self.options)
    }
}
