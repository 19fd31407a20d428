//! Monotonic Timing
//!
//! All measurements go through `std::time::Instant`, which is monotonic and
//! unaffected by wall-clock adjustments.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Timer for measuring a single run or a loop of runs
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time since `start`
    #[inline(always)]
    pub fn stop(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time since `start`, in seconds
    #[inline(always)]
    pub fn stop_secs(&self) -> f64 {
        self.stop().as_secs_f64()
    }
}

/// Run `f` once and return its output with the elapsed seconds
#[inline]
pub fn time_call<T, F>(f: F) -> (T, f64)
where
    F: FnOnce() -> T,
{
    let timer = Timer::start();
    let value = black_box(f());
    let elapsed = timer.stop_secs();
    (value, elapsed)
}

/// Run `f` `n` times back to back and return the total elapsed time
///
/// Outputs are discarded inside the timed region.
#[inline]
pub fn time_loop<T, F>(f: &mut F, n: u64) -> Duration
where
    F: FnMut() -> T,
{
    let timer = Timer::start();
    for _ in 0..n {
        let _ = black_box(f());
    }
    timer.stop()
}
