//! Core reduction engine for AeroBalance
//!
//! Turns wind-tunnel balance readings into lift, drag and pitching moment
//! with Student-t confidence bounds. A virtual balance and a virtual
//! acquisition board stand in for the hardware, driven by a historical
//! dataset from a real tunnel run.
//!
//! Pipeline:
//! - [`SignalSynthesizer`]: noisy pseudo-analog traces at any angle
//! - [`Sampler`]: discrete acquisition of one trace
//! - [`BalanceReducer`]: tare, sweep, statistics, calibration
//!
//! ```no_run
//! use aerobalance_core::{reduce, GaussianNoise, HistoricalDataset};
//!
//! let dataset = HistoricalDataset::from_rows(&[
//!     [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
//!     [10.0, 0.5, 0.2, 0.3, 0.0, 0.0, 0.0, 500.0],
//! ])?;
//!
//! let result = reduce(&dataset, 0.0, 10.0, 10.0, 1.0, 1000.0, 100, 95.0, &mut GaussianNoise::seeded(7))?;
//! println!("L = {} ± {} N", result.lift[0], result.lift_error[0]);
//! # Ok::<(), aerobalance_core::BalanceError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod calibration;
pub mod constants;
pub mod dataset;
pub mod errors;
pub mod interpolation;
pub mod noise;
pub mod reducer;
pub mod sampler;
pub mod signal;
pub mod statistics;
pub mod traits;
pub mod validation;

// Public API
pub use calibration::{BalanceLoads, CalibrationConstants};
pub use dataset::{Channel, ChannelReadings, HistoricalDataset};
pub use errors::{BalanceError, BalanceResult, ErrorKind};
pub use interpolation::BoundaryPolicy;
pub use noise::{GaussianNoise, ZeroNoise};
pub use reducer::{reduce, BalanceReducer, SweepPlan, SweepResult, SweepRow, TareOffsets};
pub use sampler::{sample, AcquisitionSettings, SampledSignal, Sampler};
pub use signal::{ChannelSignals, ContinuousSignal, NoiseProfile, SignalConfig, SignalSynthesizer};
pub use statistics::{ChannelStatistics, ConfidenceInterval, MeasuredQuantity};
pub use traits::NoiseSource;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
