//! Error types shared across gazesmooth crates.

/// Top-level error type for gazesmooth operations.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("Invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid input at line {line}: {message}")]
    Input { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using FilterError.
pub type FilterResult<T> = Result<T, FilterError>;

impl FilterError {
    pub fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn input(line: usize, msg: impl Into<String>) -> Self {
        Self::Input {
            line,
            message: msg.into(),
        }
    }
}

/// Reject anything that is not a finite, strictly positive frequency.
pub fn ensure_positive(name: &'static str, value: f64) -> FilterResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FilterError::invalid_parameter(
            name,
            value,
            "must be finite and greater than zero",
        ))
    }
}

/// Reject negative or non-finite values; zero is allowed.
pub fn ensure_non_negative(name: &'static str, value: f64) -> FilterResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FilterError::invalid_parameter(
            name,
            value,
            "must be finite and not negative",
        ))
    }
}

/// Reject smoothing factors outside `[0.0, 1.0]` (NaN included).
pub fn ensure_unit_interval(name: &'static str, value: f64) -> FilterResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(FilterError::invalid_parameter(
            name,
            value,
            "must lie within [0, 1]",
        ))
    }
}
