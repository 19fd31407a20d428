//! Result Printer
//!
//! Formats the benchmark summary line. Every value on the line is expressed in
//! the mean's unit so the numbers stay visually aligned.

use crate::display::DisplayTime;

/// Format a benchmark summary.
///
/// ```text
/// <name>: <n_runs> runs, mean time per run: <mean>[±<stdev>] <unit>.
/// Fastest run: <min> <unit>. Slowest run: <max> <unit>.
/// ```
///
/// The stdev suffix is omitted when `std_dev` is absent or zero. The second
/// line appears only when both `min` and `max` are present.
pub fn format_time_benchmark(
    name: &str,
    n_runs: u64,
    mean: f64,
    std_dev: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
) -> String {
    let mean = DisplayTime::auto(mean);
    let unit = mean.unit;

    let std_dev_str = match std_dev {
        Some(s) if s != 0.0 => format!("±{:.2}", DisplayTime::in_unit(s, unit).magnitude),
        _ => String::new(),
    };

    let bounds_str = match (min, max) {
        (Some(min), Some(max)) => format!(
            "\nFastest run: {:.2} {unit}. Slowest run: {:.2} {unit}.",
            DisplayTime::in_unit(min, unit).magnitude,
            DisplayTime::in_unit(max, unit).magnitude,
        ),
        _ => String::new(),
    };

    format!(
        "{name}: {} runs, mean time per run: {:.2}{std_dev_str} {unit}.{bounds_str}",
        group_thousands(n_runs),
        mean.magnitude,
    )
}

/// Render an integer with `,` between groups of three digits
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_only() {
        assert_eq!(
            format_time_benchmark("test_func", 10, 0.002, None, None, None),
            "test_func: 10 runs, mean time per run: 2.00 ms."
        );
    }

    #[test]
    fn test_mean_and_std_dev() {
        assert_eq!(
            format_time_benchmark("test_func", 10, 0.002, Some(0.0001), None, None),
            "test_func: 10 runs, mean time per run: 2.00±0.10 ms."
        );
    }

    #[test]
    fn test_mean_std_dev_and_bounds() {
        assert_eq!(
            format_time_benchmark(
                "test_func",
                10,
                0.002,
                Some(0.0001),
                Some(0.001),
                Some(0.003)
            ),
            "test_func: 10 runs, mean time per run: 2.00±0.10 ms.\nFastest run: 1.00 ms. Slowest run: 3.00 ms."
        );
    }

    #[test]
    fn test_mean_and_bounds() {
        assert_eq!(
            format_time_benchmark("test_func", 10, 0.002, None, Some(0.001), Some(0.003)),
            "test_func: 10 runs, mean time per run: 2.00 ms.\nFastest run: 1.00 ms. Slowest run: 3.00 ms."
        );
    }

    #[test]
    fn test_zero_std_dev_is_omitted() {
        assert_eq!(
            format_time_benchmark("f", 3, 0.5, Some(0.0), None, None),
            "f: 3 runs, mean time per run: 500.00 ms."
        );
    }

    #[test]
    fn test_one_bound_is_not_enough() {
        let line = format_time_benchmark("f", 2, 0.002, None, Some(0.001), None);
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_sub_values_share_mean_unit() {
        // Max alone would be shown in seconds, but follows the mean's unit
        assert_eq!(
            format_time_benchmark("f", 2, 0.5, None, Some(0.0001), Some(1.2)),
            "f: 2 runs, mean time per run: 500.00 ms.\nFastest run: 0.10 ms. Slowest run: 1200.00 ms."
        );
    }

    #[test]
    fn test_run_count_thousands_separator() {
        let line = format_time_benchmark("f", 1_234_567, 1.0e-7, None, None, None);
        assert_eq!(line, "f: 1,234,567 runs, mean time per run: 100.00 ns.");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(50_000), "50,000");
        assert_eq!(group_thousands(123_456), "123,456");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }
}
