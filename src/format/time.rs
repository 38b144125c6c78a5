//! Duration formatting for report cells.

const NANOS_PER_MICRO: f64 = 1_000.0;
const NANOS_PER_MILLI: f64 = 1_000_000.0;
const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Format a nanosecond count with a unit picked by magnitude.
///
/// Sub-microsecond values print as whole nanoseconds; everything else gets
/// two decimals in µs, ms or s. Each threshold is exclusive, so `1000.0`
/// is already `1.00 µs`.
#[must_use]
pub fn format_time(ns: f64) -> String {
    if ns < NANOS_PER_MICRO {
        format!("{ns:.0} ns")
    } else if ns < NANOS_PER_MILLI {
        format!("{:.2} µs", ns / NANOS_PER_MICRO)
    } else if ns < NANOS_PER_SEC {
        format!("{:.2} ms", ns / NANOS_PER_MILLI)
    } else {
        format!("{:.2} s", ns / NANOS_PER_SEC)
    }
}
