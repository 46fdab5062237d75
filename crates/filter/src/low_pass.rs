//! Single-pole exponential low-pass filter.
//!
//! `y[n] = alpha * x[n] + (1 - alpha) * y[n-1]`, where `alpha` in `[0, 1]` is
//! the weight given to the newest sample. The first sample passes through
//! unchanged and seeds the filter state.

use gazesmooth_common::{ensure_unit_interval, FilterResult};

/// Exponential smoother over a scalar stream.
#[derive(Debug, Clone)]
pub struct LowPassFilter {
    /// Previous filtered value. Only meaningful once `initialized` is set.
    last_output: f64,

    /// Previous raw input. Only meaningful once `initialized` is set.
    last_raw: f64,

    alpha: f64,
    initialized: bool,
}

impl LowPassFilter {
    /// Create a filter with the given smoothing factor.
    ///
    /// `initial_value` is held as the seed state but is never reported as a
    /// previous sample: the first call to [`filter`](Self::filter) replaces
    /// it and passes its input through unchanged.
    ///
    /// Fails if `alpha` lies outside `[0, 1]`.
    pub fn new(alpha: f64, initial_value: f64) -> FilterResult<Self> {
        let alpha = ensure_unit_interval("alpha", alpha)?;
        Ok(Self {
            last_output: initial_value,
            last_raw: initial_value,
            alpha,
            initialized: false,
        })
    }

    /// Current smoothing factor.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Replace the smoothing factor. Out-of-range values are rejected and
    /// the previous factor is kept.
    pub fn set_alpha(&mut self, alpha: f64) -> FilterResult<()> {
        self.alpha = ensure_unit_interval("alpha", alpha)?;
        Ok(())
    }

    /// Filter one sample with the stored smoothing factor.
    pub fn filter(&mut self, value: f64) -> f64 {
        if !self.initialized {
            self.last_output = value;
            self.last_raw = value;
            self.initialized = true;
            return value;
        }

        let result = self.alpha * value + (1.0 - self.alpha) * self.last_output;
        self.last_raw = value;
        self.last_output = result;
        result
    }

    /// Filter one sample after overwriting the smoothing factor.
    ///
    /// The new factor persists for later calls to [`filter`](Self::filter).
    /// An invalid `alpha` is rejected before any state changes.
    pub fn filter_with_alpha(&mut self, value: f64, alpha: f64) -> FilterResult<f64> {
        self.set_alpha(alpha)?;
        Ok(self.filter(value))
    }

    /// Same as [`filter_with_alpha`](Self::filter_with_alpha) for factors the
    /// caller derived from a cutoff and already knows are in range.
    pub(crate) fn filter_with_derived_alpha(&mut self, value: f64, alpha: f64) -> f64 {
        self.alpha = alpha;
        self.filter(value)
    }

    /// Whether a previous raw input exists.
    pub fn has_last_raw_value(&self) -> bool {
        self.initialized
    }

    /// The previous raw input, if any sample has been filtered.
    pub fn last_raw_value(&self) -> Option<f64> {
        self.initialized.then_some(self.last_raw)
    }

    /// The previous filtered output, if any sample has been filtered.
    pub fn last_value(&self) -> Option<f64> {
        self.initialized.then_some(self.last_output)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Forget all history. The next sample passes through again.
    pub fn reset(&mut self) {
        self.initialized = false;
    }
}
