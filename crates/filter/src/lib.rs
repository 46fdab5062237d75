//! gazesmooth filter core
//!
//! Real-time smoothing of a single jittery scalar stream, such as one
//! coordinate of a tracked gaze point:
//! - **Low-pass:** single-pole exponential smoother with a fixed or per-call
//!   smoothing factor
//! - **One Euro:** adaptive low-pass whose cutoff rises with the estimated
//!   speed of the signal, trading jitter for lag sample by sample
//!
//! This crate is pure computation. Every call is constant time, allocation
//! free and deterministic in the ordered history of samples it has seen.
//! Instances carry no locking; callers serialize access to each one.

pub mod low_pass;
pub mod one_euro;

pub use gazesmooth_common::{FilterError, FilterParams, FilterResult};
pub use low_pass::LowPassFilter;
pub use one_euro::OneEuroFilter;
