//! Run-and-Time
//!
//! Two measurement strategies share one auto-ranging scheme:
//! - `benchmark` times the whole loop as one aggregate and reports the mean
//! - `benchmark_stats` times every run individually and reports mean, stdev,
//!   fastest and slowest run together with the callable's last return value
//!
//! Auto-ranging probes with 1, 2, 5, 10, 20, 50, ... runs per round until one
//! round lasts at least `BenchOptions::min_time`.

use crate::measure::{Timer, time_call, time_loop};
use crate::options::{BenchOptions, callable_name};
use basicbench_report::format_time_benchmark;
use basicbench_stats::compute_summary;
use serde::Serialize;
use std::convert::Infallible;
use std::io::Write;
use std::num::NonZeroU64;
use std::time::Duration;
use tracing::{debug, trace};

/// Multipliers applied to each power of ten while auto-ranging
const AUTORANGE_STEPS: [u64; 3] = [1, 2, 5];

/// Upper bound on the sample buffer reserved before the first run
const MAX_PREALLOCATED_SAMPLES: usize = 1 << 20;

/// Outcome of the full-statistics variant
///
/// All times are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult<T> {
    /// Output of the last timed run
    pub return_value: T,
    /// Number of timed runs
    pub n_runs: u64,
    /// Mean time per run
    pub mean: f64,
    /// Sample standard deviation (absent for a single run)
    pub stdev: Option<f64>,
    /// Fastest run (absent for a single run)
    pub min: Option<f64>,
    /// Slowest run (absent for a single run)
    pub max: Option<f64>,
}

impl<T> BenchmarkResult<T> {
    /// Summary line in the same format that is printed
    pub fn summary_line(&self, name: &str) -> String {
        format_time_benchmark(name, self.n_runs, self.mean, self.stdev, self.min, self.max)
    }

    /// Discard the statistics and keep the callable's output
    pub fn into_return_value(self) -> T {
        self.return_value
    }
}

/// Round that ended auto-ranging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoRange {
    /// Runs in the final round
    pub n_runs: NonZeroU64,
    /// Wall-clock time of the final round
    pub total: Duration,
}

/// Probe run counts 1, 2, 5, 10, ... until a round lasts `min_time`.
///
/// `round` performs the given number of runs and returns how long they took,
/// or the callable's error. The sequence saturates at the largest
/// representable count rather than overflowing.
pub fn autorange<E, R>(min_time: Duration, mut round: R) -> Result<AutoRange, E>
where
    R: FnMut(NonZeroU64) -> Result<Duration, E>,
{
    let mut decade: u64 = 1;
    loop {
        for step in AUTORANGE_STEPS {
            let n = decade.saturating_mul(step);
            let n_runs = NonZeroU64::new(n).unwrap_or(NonZeroU64::MIN);
            let total = round(n_runs)?;
            debug!(n_runs = n, elapsed = ?total, "auto-range round");
            if total >= min_time || n == u64::MAX {
                debug!(n_runs = n, "auto-range settled");
                return Ok(AutoRange { n_runs, total });
            }
        }
        decade = decade.saturating_mul(10);
    }
}

/// Time `f` and return the mean seconds per run.
///
/// With a fixed run count the whole loop is timed once and divided by the
/// count. Without one, the final auto-ranging round doubles as the
/// measurement.
pub fn benchmark<T, F>(mut f: F, options: &BenchOptions) -> f64
where
    F: FnMut() -> T,
{
    let name = display_name::<F>(options);

    if options.pre_run {
        trace!(name = %name, "warm-up run");
        let _ = f();
    }

    let (n_runs, total) = match options.fixed_runs() {
        Some(n) => (n, time_loop(&mut f, n.get())),
        None => {
            let range = match autorange(options.min_time, |n| {
                Ok::<_, Infallible>(time_loop(&mut f, n.get()))
            }) {
                Ok(range) => range,
                Err(never) => match never {},
            };
            (range.n_runs, range.total)
        }
    };

    let mean = total.as_secs_f64() / n_runs.get() as f64;

    emit(
        &mut std::io::stdout().lock(),
        options,
        &format_time_benchmark(&name, n_runs.get(), mean, None, None, None),
    );

    mean
}

/// Time every run of `f` and return full statistics with its last output.
///
/// Without a fixed run count, the count is auto-ranged first (with per-run
/// timing, so the probe carries the same overhead) and then measured afresh.
/// A panic in `f` unwinds through this call untouched.
pub fn benchmark_stats<T, F>(mut f: F, options: &BenchOptions) -> BenchmarkResult<T>
where
    F: FnMut() -> T,
{
    let name = display_name::<F>(options);
    match run_stats(&name, || Ok::<T, Infallible>(f()), options) {
        Ok(result) => result,
        Err(never) => match never {},
    }
}

/// Fallible counterpart of [`benchmark_stats`].
///
/// The first `Err` returned by `f`, whether during warm-up, auto-ranging or
/// measurement, is returned unchanged and no statistics are produced.
pub fn try_benchmark_stats<T, E, F>(
    f: F,
    options: &BenchOptions,
) -> Result<BenchmarkResult<T>, E>
where
    F: FnMut() -> Result<T, E>,
{
    let name = display_name::<F>(options);
    run_stats(&name, f, options)
}

/// Full-statistics run under an explicit display name
pub fn benchmark_stats_named<T, F>(
    name: &str,
    mut f: F,
    options: &BenchOptions,
) -> BenchmarkResult<T>
where
    F: FnMut() -> T,
{
    match run_stats(name, || Ok::<T, Infallible>(f()), options) {
        Ok(result) => result,
        Err(never) => match never {},
    }
}

/// Write the summary `line` to `out` when printing is enabled
fn emit(out: &mut impl Write, options: &BenchOptions, line: &str) {
    if !options.print_result {
        return;
    }
    if let Err(e) = writeln!(out, "{line}") {
        debug!(error = %e, "failed to write summary");
    }
}

fn display_name<F>(options: &BenchOptions) -> String {
    options.name.clone().unwrap_or_else(callable_name::<F>)
}

fn run_stats<T, E, F>(
    name: &str,
    mut f: F,
    options: &BenchOptions,
) -> Result<BenchmarkResult<T>, E>
where
    F: FnMut() -> Result<T, E>,
{
    if options.pre_run {
        trace!(name = %name, "warm-up run");
        f().inspect_err(|_| debug!(name = %name, "warm-up run failed"))?;
    }

    let n_runs = match options.fixed_runs() {
        Some(n) => n,
        None => autorange(options.min_time, |n| probe_round(&mut f, n))?.n_runs,
    };

    let mut samples = Vec::with_capacity(sample_capacity(n_runs));
    let (first, elapsed) = time_call(&mut f);
    let mut return_value = first.inspect_err(|_| debug!(name = %name, "timed run failed"))?;
    samples.push(elapsed);
    for _ in 1..n_runs.get() {
        let (value, elapsed) = time_call(&mut f);
        return_value = value.inspect_err(|_| debug!(name = %name, "timed run failed"))?;
        samples.push(elapsed);
    }

    let summary = compute_summary(&samples);
    let result = BenchmarkResult {
        return_value,
        n_runs: n_runs.get(),
        mean: summary.mean,
        stdev: summary.std_dev,
        min: summary.min,
        max: summary.max,
    };

    emit(&mut std::io::stdout().lock(), options, &result.summary_line(name));

    Ok(result)
}

fn sample_capacity(n_runs: NonZeroU64) -> usize {
    usize::try_from(n_runs.get())
        .map_or(MAX_PREALLOCATED_SAMPLES, |n| n.min(MAX_PREALLOCATED_SAMPLES))
}

/// One auto-ranging round with the same per-run timing as the measurement
fn probe_round<T, E, F>(f: &mut F, n: NonZeroU64) -> Result<Duration, E>
where
    F: FnMut() -> Result<T, E>,
{
    let timer = Timer::start();
    for _ in 0..n.get() {
        let (value, _) = time_call(&mut *f);
        value?;
    }
    Ok(timer.stop())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn quiet() -> BenchOptions {
        BenchOptions::new().quiet()
    }

    #[test]
    fn test_autorange_sequence() {
        let mut seen = Vec::new();
        let range = autorange(Duration::from_millis(200), |n| {
            seen.push(n.get());
            // Pretend every run takes 1ms
            Ok::<_, Infallible>(Duration::from_millis(n.get()))
        })
        .unwrap();

        assert_eq!(seen, vec![1, 2, 5, 10, 20, 50, 100, 200]);
        assert_eq!(range.n_runs.get(), 200);
        assert_eq!(range.total, Duration::from_millis(200));
    }

    #[test]
    fn test_autorange_slow_callable_stops_at_one() {
        let range = autorange(Duration::from_millis(200), |_| {
            Ok::<_, Infallible>(Duration::from_secs(1))
        })
        .unwrap();
        assert_eq!(range.n_runs.get(), 1);
    }

    #[test]
    fn test_autorange_propagates_error() {
        let mut rounds = 0;
        let err = autorange(Duration::from_millis(200), |n| {
            rounds += 1;
            if n.get() == 5 {
                Err("boom")
            } else {
                Ok(Duration::ZERO)
            }
        })
        .unwrap_err();
        assert_eq!(err, "boom");
        assert_eq!(rounds, 3);
    }

    #[test]
    fn test_benchmark_fixed_runs() {
        let calls = Cell::new(0u64);
        let mean = benchmark(|| calls.set(calls.get() + 1), &quiet().n_runs(10));
        assert_eq!(calls.get(), 10);
        assert!(mean >= 0.0);
        assert!(mean < 0.001);
    }

    #[test]
    fn test_benchmark_pre_run_adds_one_call() {
        let calls = Cell::new(0u64);
        benchmark(|| calls.set(calls.get() + 1), &quiet().n_runs(10).pre_run(true));
        assert_eq!(calls.get(), 11);
    }

    #[test]
    fn test_benchmark_autorange_terminates() {
        let options = quiet().min_time(Duration::from_millis(20));
        let mean = benchmark(|| std::hint::black_box(1 + 1), &options);
        assert!(mean > 0.0);
        assert!(mean < 0.001);
    }

    #[test]
    fn test_stats_fixed_runs() {
        let result = benchmark_stats(|| (), &quiet().n_runs(10));

        assert_eq!(result.n_runs, 10);
        assert!(result.mean < 0.001);
        let (min, max) = (result.min.unwrap(), result.max.unwrap());
        assert!(min <= result.mean + 1e-12 && result.mean <= max + 1e-12);
        assert!(result.stdev.is_some());
    }

    #[test]
    fn test_stats_single_run_has_no_spread() {
        let result = benchmark_stats(|| 5, &quiet().n_runs(1));

        assert_eq!(result.return_value, 5);
        assert_eq!(result.n_runs, 1);
        assert!(result.mean >= 0.0);
        assert_eq!(result.stdev, None);
        assert_eq!(result.min, None);
        assert_eq!(result.max, None);
    }

    #[test]
    fn test_stats_returns_last_value() {
        let counter = Cell::new(0u32);
        let result = benchmark_stats(
            || {
                counter.set(counter.get() + 1);
                counter.get()
            },
            &quiet().n_runs(4).pre_run(true),
        );
        // One warm-up call plus four timed runs
        assert_eq!(result.return_value, 5);
    }

    #[test]
    fn test_stats_autorange() {
        let calls = Cell::new(0u64);
        let options = quiet().min_time(Duration::from_millis(10));
        let result = benchmark_stats(|| calls.set(calls.get() + 1), &options);

        assert!(result.n_runs >= 1);
        assert!(result.mean > 0.0);
        // Probing rounds run on top of the measured runs
        assert!(calls.get() > result.n_runs);
    }

    #[test]
    fn test_try_stats_propagates_first_error() {
        let calls = Cell::new(0u32);
        let err = try_benchmark_stats(
            || {
                calls.set(calls.get() + 1);
                if calls.get() == 3 {
                    Err(format!("failed on call {}", calls.get()))
                } else {
                    Ok(calls.get())
                }
            },
            &quiet().n_runs(10),
        )
        .unwrap_err();

        assert_eq!(err, "failed on call 3");
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_try_stats_warm_up_error() {
        let result = try_benchmark_stats(|| Err::<(), _>(7u8), &quiet().n_runs(3).pre_run(true));
        assert_eq!(result, Err(7));
    }

    #[test]
    fn test_try_stats_ok() {
        let result = try_benchmark_stats(|| Ok::<_, String>(1 + 2), &quiet().n_runs(3)).unwrap();
        assert_eq!(result.return_value, 3);
        assert_eq!(result.n_runs, 3);
    }

    #[test]
    #[should_panic(expected = "target panicked")]
    fn test_stats_panic_propagates() {
        benchmark_stats(|| -> u32 { panic!("target panicked") }, &quiet().n_runs(2));
    }

    #[test]
    fn test_emit_writes_summary_line_when_enabled() {
        let result = benchmark_stats(|| 1, &quiet().n_runs(3));
        let line = result.summary_line("emit_target");

        let mut out = Vec::new();
        emit(&mut out, &BenchOptions::new(), &line);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{line}\n"));
    }

    #[test]
    fn test_emit_silent_when_disabled() {
        let mut out = Vec::new();
        emit(&mut out, &quiet(), "emit_target: 1 runs, mean time per run: 1.00 s.");
        assert!(out.is_empty());
    }

    #[test]
    fn test_printing_is_on_by_default() {
        let mut out = Vec::new();
        emit(&mut out, &BenchOptions::default(), "line");
        assert_eq!(out, b"line\n");
    }

    #[test]
    fn test_sample_buffer_is_capped() {
        assert_eq!(sample_capacity(NonZeroU64::MAX), MAX_PREALLOCATED_SAMPLES);
        assert_eq!(
            sample_capacity(NonZeroU64::new(1 << 40).unwrap()),
            MAX_PREALLOCATED_SAMPLES
        );
        assert_eq!(sample_capacity(NonZeroU64::new(10).unwrap()), 10);
    }

    #[test]
    fn test_summary_line_uses_printer_format() {
        let result = BenchmarkResult {
            return_value: (),
            n_runs: 10,
            mean: 0.002,
            stdev: Some(0.0001),
            min: Some(0.001),
            max: Some(0.003),
        };
        assert_eq!(
            result.summary_line("test_func"),
            "test_func: 10 runs, mean time per run: 2.00±0.10 ms.\nFastest run: 1.00 ms. Slowest run: 3.00 ms."
        );
    }
}
