//! Constants for AeroBalance Core
//!
//! Centralized numeric values used throughout the reduction pipeline. Every
//! constant states its unit and where the number comes from.
//!
//! ## Organization
//!
//! - **Calibration**: balance conversion factors from the tunnel datasheet
//! - **Instruments**: load-cell and micromanometer noise and accuracy
//! - **Acquisition**: virtual acquisition board limits and signal time base
//! - **Dataset**: column layout of the historical balance table
//!
//! ## Usage Guidelines
//!
//! 1. Use these constants instead of magic numbers
//! 2. Include the unit in the name
//! 3. Reference the datasheet or procedure the value comes from

/// Balance calibration factors.
pub mod calibration;

/// Instrument noise levels and accuracy specifications.
pub mod instruments;

/// Acquisition board limits and continuous-signal time base.
pub mod acquisition;

/// Historical dataset column layout.
pub mod dataset;

pub use calibration::{CALIB_LIFT_N_PER_V, CALIB_DRAG_N_PER_V, CALIB_MOMENT_NM_PER_V};

pub use instruments::{
    FORE_NOISE_STD_V, DRAG_NOISE_STD_V, AFT_NOISE_STD_V, DYNAMIC_PRESSURE_NOISE_STD_PA,
    MANOMETER_RELATIVE_ACCURACY, MANOMETER_ABSOLUTE_ACCURACY_PA,
};

pub use acquisition::{
    MAX_SAMPLING_RATE_HZ, MAX_ACQUISITION_DURATION_S, ACQUISITION_START_DELAY_S,
    SIGNAL_DURATION_S, SIGNAL_RESOLUTION, MAX_SWEEP_ANGLES,
};
