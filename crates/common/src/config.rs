//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ensure_non_negative, ensure_positive, FilterError, FilterResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// One Euro tuning parameters.
    pub filter: FilterParams,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// The four tuning parameters of a One Euro filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// Nominal sample rate (Hz), used until timestamps provide a better one.
    pub frequency: f64,

    /// Cutoff (Hz) applied when the signal is stationary.
    pub min_cutoff: f64,

    /// How fast the cutoff rises with estimated speed.
    pub beta: f64,

    /// Cutoff (Hz) used to smooth the derivative estimate.
    pub derivative_cutoff: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "gazesmooth_filter=trace,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            frequency: 30.0,
            min_cutoff: 1.0,
            beta: 0.007,
            derivative_cutoff: 1.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl FilterParams {
    /// Check every parameter against the same rules the filter setters use.
    pub fn validate(&self) -> FilterResult<()> {
        ensure_positive("frequency", self.frequency)?;
        ensure_positive("min_cutoff", self.min_cutoff)?;
        ensure_non_negative("beta", self.beta)?;
        ensure_positive("derivative_cutoff", self.derivative_cutoff)?;
        Ok(())
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &Path) -> FilterResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config
            .filter
            .validate()
            .map_err(|e| FilterError::config(format!("{}: {e}", path.display())))?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> FilterResult<()> {
        self.save_to(&config_file_path())
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> FilterResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("gazesmooth").join("config.json")
}
