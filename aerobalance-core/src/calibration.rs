//! Balance Calibration
//!
//! Converts tare-corrected cell voltages into forces and moments. The lift
//! and pitching moment come from the fore and aft cells together:
//!
//! ```text
//! Lift   = (Fore + Aft) × k_lift      ε_L = √(ε_f² + ε_a²) × k_lift
//! Drag   =  Drag        × k_drag      ε_D = ε_d × k_drag
//! Moment = (Fore − Aft) × k_mom       ε_M = √(ε_f² + ε_a²) × k_mom
//! ```
//!
//! The factors are explicit configuration passed to the reducer; defaults
//! come from the tunnel balance datasheet.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::calibration::{CALIB_LIFT_N_PER_V, CALIB_DRAG_N_PER_V, CALIB_MOMENT_NM_PER_V},
    errors::BalanceResult,
    statistics::MeasuredQuantity,
    validation::check_finite,
};

/// Voltage-to-load conversion factors
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CalibrationConstants {
    /// Lift factor (N/V)
    pub lift: f64,
    /// Drag factor (N/V)
    pub drag: f64,
    /// Pitching moment factor (N·m/V)
    pub moment: f64,
}

impl Default for CalibrationConstants {
    fn default() -> Self {
        Self {
            lift: CALIB_LIFT_N_PER_V,
            drag: CALIB_DRAG_N_PER_V,
            moment: CALIB_MOMENT_NM_PER_V,
        }
    }
}

/// Loads at one angle with their error bounds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BalanceLoads {
    /// Lift (N)
    pub lift: MeasuredQuantity,
    /// Drag (N)
    pub drag: MeasuredQuantity,
    /// Pitching moment (N·m)
    pub moment: MeasuredQuantity,
}

impl CalibrationConstants {
    /// Custom factors
    pub fn new(lift: f64, drag: f64, moment: f64) -> Self {
        Self { lift, drag, moment }
    }

    /// Check that every factor is a finite number
    pub fn validate(&self) -> BalanceResult<()> {
        check_finite("calib_lift", self.lift)?;
        check_finite("calib_drag", self.drag)?;
        check_finite("calib_moment", self.moment)
    }

    /// Convert corrected cell voltages (with errors) into loads
    pub fn convert(&self, fore: MeasuredQuantity, drag: MeasuredQuantity, aft: MeasuredQuantity) -> BalanceLoads {
        BalanceLoads {
            lift: fore.plus(aft).scaled(self.lift),
            drag: drag.scaled(self.drag),
            moment: fore.minus(aft).scaled(self.moment),
        }
    }
}
