//! Balance Calibration Constants
//!
//! Conversion factors from load-cell voltage to force or moment, taken from
//! the wind tunnel balance datasheet. Lift and moment come from linear
//! combinations of the fore and aft cells; drag has its own cell.

/// Lift conversion factor (N/V).
///
/// Applied to the sum of fore and aft cell voltages.
pub const CALIB_LIFT_N_PER_V: f64 = 131.1;

/// Drag conversion factor (N/V).
///
/// Applied to the drag cell voltage.
pub const CALIB_DRAG_N_PER_V: f64 = 90.5;

/// Pitching moment conversion factor (N·m/V).
///
/// Applied to the difference of fore and aft cell voltages.
pub const CALIB_MOMENT_NM_PER_V: f64 = 8.56;
