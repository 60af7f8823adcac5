//! Human-readable time formatting.

use std::time::Duration;

/// Formats a duration with the largest unit that keeps it above 1:
/// `ns` below 1 µs, `μs` below 1 ms, `ms` below 1 s, otherwise `s`.
///
/// ```
/// use sortbench_console::format_elapsed;
/// use std::time::Duration;
///
/// assert_eq!(format_elapsed(Duration::from_nanos(250)), "250.0 ns");
/// assert_eq!(format_elapsed(Duration::from_micros(12)), "12.0 μs");
/// assert_eq!(format_elapsed(Duration::from_millis(3)), "3.0 ms");
/// assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.500 s");
/// ```
pub fn format_elapsed(elapsed: Duration) -> String {
    format_seconds(elapsed.as_secs_f64())
}

/// [`format_elapsed`] for a raw number of seconds.
pub fn format_seconds(seconds: f64) -> String {
    if seconds < 1e-6 {
        format!("{:.1} ns", seconds * 1e9)
    } else if seconds < 1e-3 {
        format!("{:.1} μs", seconds * 1e6)
    } else if seconds < 1.0 {
        format!("{:.1} ms", seconds * 1000.0)
    } else {
        format!("{:.3} s", seconds)
    }
}

pub(crate) fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_seconds(0.0), "0.0 ns");
        assert_eq!(format_seconds(1e-6), "1.0 μs");
        assert_eq!(format_seconds(1e-3), "1.0 ms");
        assert_eq!(format_seconds(1.0), "1.000 s");
    }

    #[test]
    fn test_duration_ms() {
        assert_eq!(format_duration_ms(999), "999ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }
}
