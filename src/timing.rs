//! Timing harness
//!
//! Wraps a unit of work with a monotonic clock ([`std::time::Instant`]) and
//! reports elapsed whole microseconds. Timing itself cannot fail; the only
//! side effect is the two-line text report per experiment.

use std::fmt::Display;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A value together with the wall-clock time its computation took.
#[derive(Debug, Clone, Copy)]
pub struct Timed<T> {
    /// Elapsed monotonic time for the wrapped closure.
    pub elapsed: Duration,
    /// The closure's return value.
    pub value: T,
}

/// Run `work` between two monotonic clock reads.
pub fn time_it<T>(work: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = work();
    let elapsed = start.elapsed();
    Timed { elapsed, value }
}

/// One experiment's reported outcome.
///
/// The result string is part of the contract, not just diagnostics: printing
/// the post-loop value is what keeps an optimizing compiler from discarding
/// the multiply chain as dead code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Measurement {
    label: String,
    elapsed_us: u128,
    result: String,
    recorded_at: DateTime<Utc>,
}

impl Measurement {
    /// Record a measurement for experiment `number`.
    ///
    /// `elapsed` is truncated to whole microseconds, matching the original
    /// `duration_cast<microseconds>` report.
    #[must_use]
    pub fn new(number: u32, elapsed: Duration, result: impl Display) -> Self {
        Self {
            label: format!("test#{number}"),
            elapsed_us: elapsed.as_micros(),
            result: result.to_string(),
            recorded_at: Utc::now(),
        }
    }

    /// Record a measurement from a [`Timed`] value.
    #[must_use]
    pub fn from_timed<T: Display>(number: u32, timed: &Timed<T>) -> Self {
        Self::new(number, timed.elapsed, &timed.value)
    }

    /// Get the experiment label (`test#<N>`).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the elapsed time in whole microseconds.
    #[must_use]
    pub const fn elapsed_us(&self) -> u128 {
        self.elapsed_us
    }

    /// Get the formatted result value.
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Get the moment the measurement was recorded.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Write the two contractual report lines.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_report(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}: {} us", self.label, self.elapsed_us)?;
        writeln!(out, "the result is {}", self.result)
    }
}

/// Joins experiment 3's three accumulators with underscores for reporting.
#[derive(Debug, Clone, Copy)]
pub struct JoinedResults(
    /// Post-loop accumulator values in experiment order.
    pub [f64; 3],
);

impl Display for JoinedResults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}_{b}_{c}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_it_returns_value() {
        let timed = time_it(|| 2 + 2);
        assert_eq!(timed.value, 4);
    }

    #[test]
    fn test_time_it_measures_something() {
        let timed = time_it(|| std::thread::sleep(Duration::from_millis(5)));
        assert!(timed.elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_measurement_report_format() {
        let m = Measurement::new(1, Duration::from_micros(1234), 5120.0);
        let mut out = Vec::new();
        m.write_report(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "test#1: 1234 us\nthe result is 5120\n");
    }

    #[test]
    fn test_microseconds_truncate() {
        // 1999 ns is still 1 us
        let m = Measurement::new(2, Duration::from_nanos(1_999), 0.0);
        assert_eq!(m.elapsed_us(), 1);
    }

    #[test]
    fn test_joined_results_format() {
        let joined = JoinedResults([5120.0, 295_245.0, 5_242_880.0]);
        assert_eq!(joined.to_string(), "5120_295245_5242880");
    }

    #[test]
    fn test_infinity_prints_inf() {
        let m = Measurement::new(1, Duration::ZERO, f64::INFINITY);
        assert_eq!(m.result(), "inf");
    }

    #[test]
    fn test_measurement_json_round_trip() {
        let m = Measurement::new(4, Duration::from_micros(88), 1701.0);
        let json = serde_json::to_string(&m).unwrap();
        let back: Measurement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert_eq!(back.recorded_at(), m.recorded_at());
    }

    #[test]
    fn test_recorded_at_is_capture_time() {
        let before = Utc::now();
        let m = Measurement::new(1, Duration::from_micros(1), 0.0);
        let after = Utc::now();
        assert!(m.recorded_at() >= before);
        assert!(m.recorded_at() <= after);
    }
}
