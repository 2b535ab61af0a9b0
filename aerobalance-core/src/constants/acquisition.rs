//! Acquisition Board Limits and Signal Time Base
//!
//! The virtual acquisition board samples a pseudo-analog trace. These limits
//! keep every sample time inside the trace and the sampling well above the
//! trace's own point spacing.

// ===== ACQUISITION BOARD =====

/// Maximum sampling rate (Hz).
///
/// The continuous trace has 1e5 points per second; sampling faster than
/// 1e4 Hz would land several samples between two trace points.
pub const MAX_SAMPLING_RATE_HZ: f64 = 10_000.0;

/// Maximum acquisition duration per point (s).
///
/// Five minutes of sampling per angle.
pub const MAX_ACQUISITION_DURATION_S: f64 = 300.0;

/// Delay before the first sample (s).
///
/// Acquisition never starts at t = 0, the first trace point.
pub const ACQUISITION_START_DELAY_S: f64 = 1e-3;

// ===== CONTINUOUS SIGNAL =====

/// Duration of the synthesized pseudo-analog trace (s).
pub const SIGNAL_DURATION_S: f64 = 10.0;

/// Number of points in the synthesized trace, endpoints included.
pub const SIGNAL_RESOLUTION: usize = 1_000_000;

/// Smallest trace that still defines an interval.
pub const MIN_SIGNAL_RESOLUTION: usize = 2;

// ===== SWEEP =====

/// Maximum number of angles in one sweep.
///
/// Each angle synthesizes four full traces, so a sweep this long already
/// runs for hours on the reference time base.
pub const MAX_SWEEP_ANGLES: usize = 100_000;
