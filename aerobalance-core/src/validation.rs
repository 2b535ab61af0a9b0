//! Common Parameter Checks
//!
//! Shared checks used by the synthesizer, sampler and reducer so every entry
//! point rejects bad input the same way and with the same error shape.
//!
//! All functions are pure and return the first violation found. They never
//! clamp: a value that fails is reported, not repaired.
//!
//! ```rust
//! use aerobalance_core::validation::{check_positive, check_at_most};
//!
//! let rate = 1000.0;
//! check_positive("sampling_rate", rate)?;
//! check_at_most("sampling_rate", rate, 10_000.0)?;
//! # Ok::<(), aerobalance_core::BalanceError>(())
//! ```

use crate::{
    errors::{BalanceError, BalanceResult},
    traits::Validatable,
};

/// Check that a value lies within `[min, max]`
pub fn check_range(value: f64, min: f64, max: f64) -> BalanceResult<()> {
    if !value.is_valid() || value < min || value > max {
        Err(BalanceError::OutOfDomain { value, min, max })
    } else {
        Ok(())
    }
}

/// Check that a parameter is a finite number
pub fn check_finite(parameter: &'static str, value: f64) -> BalanceResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(BalanceError::InvalidParameter {
            parameter,
            value,
            reason: "must be a finite number",
        })
    }
}

/// Check that a parameter is finite and strictly positive
pub fn check_positive(parameter: &'static str, value: f64) -> BalanceResult<()> {
    check_finite(parameter, value)?;
    if value <= 0.0 {
        return Err(BalanceError::InvalidParameter {
            parameter,
            value,
            reason: "must be positive",
        });
    }
    Ok(())
}

/// Check that a parameter is finite and not negative
pub fn check_non_negative(parameter: &'static str, value: f64) -> BalanceResult<()> {
    check_finite(parameter, value)?;
    if value < 0.0 {
        return Err(BalanceError::InvalidParameter {
            parameter,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}

/// Check a parameter against a hard upper limit
pub fn check_at_most(parameter: &'static str, value: f64, limit: f64) -> BalanceResult<()> {
    if value > limit {
        Err(BalanceError::LimitExceeded { parameter, value, limit })
    } else {
        Ok(())
    }
}

/// Check that a percentage lies strictly inside (0, 100)
pub fn check_percentage(parameter: &'static str, value: f64) -> BalanceResult<()> {
    check_finite(parameter, value)?;
    if value <= 0.0 || value >= 100.0 {
        return Err(BalanceError::InvalidParameter {
            parameter,
            value,
            reason: "must lie strictly between 0 and 100",
        });
    }
    Ok(())
}
