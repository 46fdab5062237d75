//! Timestamp utilities for sample streams.
//!
//! The filter core works exclusively in seconds. Callers that carry integer
//! timestamps (frame clocks, monotonic counters) convert them here, once,
//! through a [`TimestampUnit`] so that elapsed-time arithmetic stays
//! consistent across a stream.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Unit in which a caller's integer timestamps are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampUnit {
    #[default]
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl TimestampUnit {
    /// Number of ticks of this unit in one second.
    pub fn ticks_per_second(self) -> f64 {
        match self {
            Self::Seconds => 1.0,
            Self::Milliseconds => 1_000.0,
            Self::Microseconds => 1_000_000.0,
            Self::Nanoseconds => 1_000_000_000.0,
        }
    }

    /// Convert an integer timestamp in this unit to seconds.
    pub fn to_secs(self, ticks: i64) -> f64 {
        ticks as f64 / self.ticks_per_second()
    }

    /// Convert a fractional timestamp in this unit to seconds.
    pub fn to_secs_f64(self, ticks: f64) -> f64 {
        ticks / self.ticks_per_second()
    }
}

impl fmt::Display for TimestampUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
            Self::Microseconds => "us",
            Self::Nanoseconds => "ns",
        };
        f.write_str(s)
    }
}

impl FromStr for TimestampUnit {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "secs" | "seconds" => Ok(Self::Seconds),
            "ms" | "millis" | "milliseconds" => Ok(Self::Milliseconds),
            "us" | "micros" | "microseconds" => Ok(Self::Microseconds),
            "ns" | "nanos" | "nanoseconds" => Ok(Self::Nanoseconds),
            other => Err(FilterError::config(format!(
                "unknown timestamp unit '{other}' (expected s|ms|us|ns)"
            ))),
        }
    }
}

/// Convert a nanosecond value to seconds.
pub fn ns_to_secs(ns: u64) -> f64 {
    ns as f64 / 1_000_000_000.0
}

/// Convert seconds to nanoseconds.
pub fn secs_to_ns(secs: f64) -> u64 {
    (secs * 1_000_000_000.0) as u64
}

/// Sample rate (Hz) implied by two consecutive timestamps in seconds.
///
/// Returns `None` when no time elapsed, time ran backwards, or the gap is so
/// small that the reciprocal overflows.
pub fn rate_between(previous_secs: f64, current_secs: f64) -> Option<f64> {
    let elapsed = current_secs - previous_secs;
    if elapsed.is_nan() || elapsed <= 0.0 {
        return None;
    }
    let rate = 1.0 / elapsed;
    rate.is_finite().then_some(rate)
}
