//! gazesmooth common utilities
//!
//! Shared infrastructure for all gazesmooth crates:
//! - Error types and result aliases
//! - Timestamp unit conversion and sample-rate derivation
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
