//! One Euro filter: a speed-adaptive low-pass filter.
//!
//! Two [`LowPassFilter`]s cooperate per sample:
//! 1. the raw derivative `(x - x_prev) * rate` is smoothed with a fixed
//!    cutoff (`derivative_cutoff`) to estimate the signal speed;
//! 2. the value itself is smoothed with an adaptive cutoff
//!    `min_cutoff + beta * |speed|`.
//!
//! A near-stationary signal gets heavy smoothing (low jitter), a fast one
//! gets light smoothing (low lag). See Casiez et al., "1€ Filter" (CHI 2012).
//!
//! Timestamps are seconds. Integer clocks should be converted with
//! [`gazesmooth_common::TimestampUnit`] before they reach the filter.

use std::f64::consts::PI;

use gazesmooth_common::{
    ensure_non_negative, ensure_positive, rate_between, FilterParams, FilterResult,
};

use crate::low_pass::LowPassFilter;

/// Adaptive smoother for one scalar channel.
#[derive(Debug, Clone)]
pub struct OneEuroFilter {
    /// Configured nominal rate (Hz).
    frequency: f64,

    /// Rate (Hz) used for the next sample. Starts at `frequency`, then
    /// tracks the spacing of increasing timestamps. Always > 0.
    sample_rate: f64,

    min_cutoff: f64,
    beta: f64,
    derivative_cutoff: f64,

    last_timestamp: Option<f64>,
    value_filter: LowPassFilter,
    derivative_filter: LowPassFilter,
}

impl OneEuroFilter {
    /// Create a filter.
    ///
    /// - `frequency`: nominal sample rate (Hz), > 0
    /// - `min_cutoff`: cutoff (Hz) for a stationary signal, > 0
    /// - `beta`: speed coefficient, >= 0; larger values cut lag on fast motion
    /// - `derivative_cutoff`: cutoff (Hz) for the speed estimate, > 0
    pub fn new(
        frequency: f64,
        min_cutoff: f64,
        beta: f64,
        derivative_cutoff: f64,
    ) -> FilterResult<Self> {
        let frequency = ensure_positive("frequency", frequency)?;
        let min_cutoff = ensure_positive("min_cutoff", min_cutoff)?;
        let beta = ensure_non_negative("beta", beta)?;
        let derivative_cutoff = ensure_positive("derivative_cutoff", derivative_cutoff)?;

        let mut filter = Self {
            frequency,
            sample_rate: frequency,
            min_cutoff,
            beta,
            derivative_cutoff,
            last_timestamp: None,
            value_filter: LowPassFilter::new(1.0, 0.0)?,
            derivative_filter: LowPassFilter::new(1.0, 0.0)?,
        };
        // Nominal-rate factors; each sample overwrites them.
        filter.value_filter.set_alpha(filter.alpha(min_cutoff))?;
        filter
            .derivative_filter
            .set_alpha(filter.alpha(derivative_cutoff))?;
        Ok(filter)
    }

    /// Create a filter from a validated parameter set.
    pub fn from_params(params: &FilterParams) -> FilterResult<Self> {
        Self::new(
            params.frequency,
            params.min_cutoff,
            params.beta,
            params.derivative_cutoff,
        )
    }

    /// Current parameter set. The nominal frequency is reported, not the
    /// rate derived from timestamps.
    pub fn params(&self) -> FilterParams {
        FilterParams {
            frequency: self.frequency,
            min_cutoff: self.min_cutoff,
            beta: self.beta,
            derivative_cutoff: self.derivative_cutoff,
        }
    }

    /// Smoothing factor for `cutoff` (Hz) at the current sample rate.
    ///
    /// `alpha = 1 / (1 + tau / te)` with `tau = 1 / (2 pi cutoff)` and
    /// `te = 1 / rate`; lies in `(0, 1]` for positive finite inputs. It grows
    /// with the cutoff and with the sample interval `te`.
    pub fn alpha(&self, cutoff: f64) -> f64 {
        let te = 1.0 / self.sample_rate;
        let tau = 1.0 / (2.0 * PI * cutoff);
        1.0 / (1.0 + tau / te)
    }

    /// Filter one sample taken at `timestamp` seconds.
    ///
    /// The first sample is returned unchanged. Equal or decreasing
    /// timestamps keep the previous sample rate; the timestamp is still
    /// recorded.
    pub fn filter_value(&mut self, value: f64, timestamp: f64) -> f64 {
        if let Some(last) = self.last_timestamp {
            match rate_between(last, timestamp) {
                Some(rate) => self.sample_rate = rate,
                None => tracing::debug!(
                    last,
                    timestamp,
                    sample_rate = self.sample_rate,
                    "Non-increasing timestamp, keeping previous sample rate"
                ),
            }
        }
        self.last_timestamp = Some(timestamp);

        let raw_derivative = match self.value_filter.last_raw_value() {
            Some(previous) => (value - previous) * self.sample_rate,
            None => 0.0,
        };

        let speed_alpha = self.alpha(self.derivative_cutoff);
        let speed = self
            .derivative_filter
            .filter_with_derived_alpha(raw_derivative, speed_alpha);

        let cutoff = self.min_cutoff + self.beta * speed.abs();
        let value_alpha = self.alpha(cutoff);
        let filtered = self
            .value_filter
            .filter_with_derived_alpha(value, value_alpha);

        tracing::trace!(
            value,
            timestamp,
            sample_rate = self.sample_rate,
            speed,
            cutoff,
            filtered,
            "One Euro sample"
        );

        filtered
    }

    /// Forget all history and return to the nominal sample rate.
    pub fn reset(&mut self) {
        self.sample_rate = self.frequency;
        self.last_timestamp = None;
        self.value_filter.reset();
        self.derivative_filter.reset();
    }

    /// Nominal sample rate (Hz).
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Set the nominal sample rate. Also replaces the current rate until the
    /// next increasing timestamp refines it.
    pub fn set_frequency(&mut self, frequency: f64) -> FilterResult<()> {
        self.frequency = ensure_positive("frequency", frequency)?;
        self.sample_rate = self.frequency;
        Ok(())
    }

    pub fn min_cutoff(&self) -> f64 {
        self.min_cutoff
    }

    pub fn set_min_cutoff(&mut self, min_cutoff: f64) -> FilterResult<()> {
        self.min_cutoff = ensure_positive("min_cutoff", min_cutoff)?;
        Ok(())
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn set_beta(&mut self, beta: f64) -> FilterResult<()> {
        self.beta = ensure_non_negative("beta", beta)?;
        Ok(())
    }

    pub fn derivative_cutoff(&self) -> f64 {
        self.derivative_cutoff
    }

    pub fn set_derivative_cutoff(&mut self, derivative_cutoff: f64) -> FilterResult<()> {
        self.derivative_cutoff = ensure_positive("derivative_cutoff", derivative_cutoff)?;
        Ok(())
    }

    /// Rate (Hz) that the next sample will use if its timestamp does not
    /// advance.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Timestamp (seconds) of the most recent sample.
    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }
}
