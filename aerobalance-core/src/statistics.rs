//! Measurement Statistics and Error Propagation
//!
//! ## Reading uncertainty
//!
//! Each balance reading is the mean of `n` samples. Its uncertainty at a
//! given confidence level is the Student-t half-width:
//!
//! ```text
//! ε = t(p, ν) × σ / √n
//!
//! Where:
//! - σ = standard deviation of the samples (population, ddof = 0)
//! - ν = n − 1 degrees of freedom
//! - p = (confidence% + 100) / 200, the two-sided percentile
//! ```
//!
//! At 95 % confidence and n = 100, t ≈ 1.984.
//!
//! ## Propagation
//!
//! Independent errors combine by root-sum-of-squares. For sums and
//! differences of two readings, and for scaling by a constant:
//!
//! ```text
//! a ± b   →  ε = √(εa² + εb²)
//! k × a   →  ε = |k| × εa
//! ```
//!
//! Tare subtraction is such a difference, which is why the offset error is
//! folded into every corrected reading.
//!
//! ## Micromanometer floor
//!
//! The manometer manual guarantees ±(1 % of reading + 1 Pa). The reported
//! error is whichever is larger: that floor or the statistical half-width.

use statrs::distribution::{ContinuousCDF, StudentsT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::instruments::{MANOMETER_ABSOLUTE_ACCURACY_PA, MANOMETER_RELATIVE_ACCURACY},
    errors::{BalanceError, BalanceResult},
    validation::check_percentage,
};

/// Mean and spread of a sampled channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation (ddof = 0)
    pub std_dev: f64,
    /// Number of samples
    pub count: usize,
}

impl ChannelStatistics {
    /// Statistics of a non-empty sample
    pub fn from_samples(samples: &[f64]) -> BalanceResult<Self> {
        if samples.is_empty() {
            return Err(BalanceError::InsufficientData { required: 1, available: 0 });
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;

        Ok(Self {
            mean,
            std_dev: variance.sqrt(),
            count: samples.len(),
        })
    }

    /// Confidence half-width of the mean
    pub fn error(&self, interval: &ConfidenceInterval) -> f64 {
        interval.half_width(self.std_dev, self.count)
    }
}

/// Two-sided Student-t interval at a fixed confidence and sample size
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConfidenceInterval {
    /// Confidence level in percent, inside (0, 100)
    pub confidence_pct: f64,
    /// ν = samples − 1
    pub degrees_of_freedom: usize,
    /// Critical value t(p, ν)
    pub t_critical: f64,
}

impl ConfidenceInterval {
    /// Interval for `samples` readings at `confidence_pct` percent
    pub fn student_t(confidence_pct: f64, samples: usize) -> BalanceResult<Self> {
        check_percentage("confidence_pct", confidence_pct)?;
        if samples < 2 {
            return Err(BalanceError::InvalidParameter {
                parameter: "num_samples",
                value: samples as f64,
                reason: "need at least 2 samples for one degree of freedom",
            });
        }

        let degrees_of_freedom = samples - 1;
        let percentile = (confidence_pct + 100.0) / 200.0;
        let distribution = StudentsT::new(0.0, 1.0, degrees_of_freedom as f64).map_err(|_| {
            BalanceError::InvalidParameter {
                parameter: "degrees_of_freedom",
                value: degrees_of_freedom as f64,
                reason: "rejected by the Student-t distribution",
            }
        })?;

        Ok(Self {
            confidence_pct,
            degrees_of_freedom,
            t_critical: distribution.inverse_cdf(percentile),
        })
    }

    /// `t × σ / √n`
    pub fn half_width(&self, std_dev: f64, samples: usize) -> f64 {
        self.t_critical * std_dev / (samples as f64).sqrt()
    }
}

/// A value with its absolute uncertainty
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasuredQuantity {
    /// Best estimate
    pub value: f64,
    /// Absolute error bound (same unit as `value`)
    pub error: f64,
}

impl MeasuredQuantity {
    /// Value with error
    pub fn new(value: f64, error: f64) -> Self {
        Self { value, error }
    }

    /// `self + other`, errors in quadrature
    pub fn plus(self, other: Self) -> Self {
        Self::new(self.value + other.value, root_sum_square(self.error, other.error))
    }

    /// `self − other`, errors in quadrature
    pub fn minus(self, other: Self) -> Self {
        Self::new(self.value - other.value, root_sum_square(self.error, other.error))
    }

    /// `factor × self`
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.value * factor, self.error * factor.abs())
    }

    /// Fold an extra independent error into this one
    pub fn with_added_error(self, error: f64) -> Self {
        Self::new(self.value, root_sum_square(self.error, error))
    }
}

/// `√(a² + b²)`
pub fn root_sum_square(a: f64, b: f64) -> f64 {
    (a * a + b * b).sqrt()
}

/// Micromanometer error: accuracy floor or statistical error, whichever is larger
pub fn dynamic_pressure_error(reading_pa: f64, statistical_error_pa: f64) -> f64 {
    let floor = MANOMETER_RELATIVE_ACCURACY * reading_pa + MANOMETER_ABSOLUTE_ACCURACY_PA;
    floor.max(statistical_error_pa)
}
