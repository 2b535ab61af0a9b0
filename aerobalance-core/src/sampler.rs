//! Virtual Data-Acquisition Board
//!
//! Samples a [`ContinuousSignal`] the way the tunnel's acquisition board
//! samples the balance: `num_samples` readings at `sampling_rate`, starting
//! 1 ms after the trace begins.
//!
//! ```text
//! final_time = num_samples / sampling_rate
//!
//! t_k = 1 ms + k × (final_time − 1 ms) / (num_samples − 1),   k = 0..num_samples−1
//! ```
//!
//! Both ends are included, so the first sample sits at 1 ms and the last at
//! `final_time`. Values between trace points are interpolated linearly.
//!
//! ## Limits
//!
//! The board is limited to 10 kHz and 300 s per acquisition. Both are
//! checked up front and reported as configuration errors, never clamped. A
//! window that ends past the trace is reported as a domain error.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::acquisition::{ACQUISITION_START_DELAY_S, MAX_ACQUISITION_DURATION_S, MAX_SAMPLING_RATE_HZ},
    errors::{BalanceError, BalanceResult},
    interpolation::{interpolate_many, linspace, BoundaryPolicy},
    signal::ContinuousSignal,
    validation::{check_at_most, check_positive, check_range},
};

/// Rate and length of one acquisition
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct AcquisitionSettings {
    /// Samples per second (Hz)
    pub sampling_rate: f64,
    /// Samples per acquisition
    pub num_samples: usize,
}

impl Default for AcquisitionSettings {
    fn default() -> Self {
        Self {
            sampling_rate: 1000.0,
            num_samples: 1000,
        }
    }
}

impl AcquisitionSettings {
    /// Settings for `num_samples` readings at `sampling_rate` Hz
    pub fn new(sampling_rate: f64, num_samples: usize) -> Self {
        Self { sampling_rate, num_samples }
    }

    /// Acquisition window length in seconds
    pub fn duration_s(&self) -> f64 {
        self.num_samples as f64 / self.sampling_rate
    }

    /// Check the board limits
    pub fn validate(&self) -> BalanceResult<()> {
        check_positive("sampling_rate", self.sampling_rate)?;
        check_at_most("sampling_rate", self.sampling_rate, MAX_SAMPLING_RATE_HZ)?;

        if self.num_samples == 0 {
            return Err(BalanceError::InvalidParameter {
                parameter: "num_samples",
                value: 0.0,
                reason: "must be at least 1",
            });
        }

        let duration = self.duration_s();
        check_at_most("acquisition_duration", duration, MAX_ACQUISITION_DURATION_S)?;

        if self.num_samples > 1 && duration <= ACQUISITION_START_DELAY_S {
            return Err(BalanceError::InvalidParameter {
                parameter: "acquisition_duration",
                value: duration,
                reason: "must exceed the 1 ms start delay",
            });
        }
        Ok(())
    }

    /// Sample instants, from the start delay to the end of the window
    pub fn timestamps(&self) -> Vec<f64> {
        linspace(ACQUISITION_START_DELAY_S, self.duration_s(), self.num_samples)
    }
}

/// Discrete readings and the instants they were taken
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampledSignal {
    timestamps: Vec<f64>,
    values: Vec<f64>,
}

impl SampledSignal {
    /// Sample instants (s)
    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    /// Sampled values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no samples were taken
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Split into `(values, timestamps)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.values, self.timestamps)
    }
}

/// Acquisition board with fixed settings
///
/// The sample instants are computed once and reused for every trace.
#[derive(Debug, Clone)]
pub struct Sampler {
    settings: AcquisitionSettings,
    timestamps: Vec<f64>,
}

impl Sampler {
    /// Board with validated settings
    pub fn new(settings: AcquisitionSettings) -> BalanceResult<Self> {
        settings.validate()?;
        Ok(Self {
            timestamps: settings.timestamps(),
            settings,
        })
    }

    /// Active settings
    pub fn settings(&self) -> &AcquisitionSettings {
        &self.settings
    }

    /// Sample instants used for every acquisition
    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    /// Acquire one trace
    pub fn sample(&self, signal: &ContinuousSignal) -> BalanceResult<SampledSignal> {
        if self.settings.num_samples >= signal.len() {
            return Err(BalanceError::InvalidParameter {
                parameter: "num_samples",
                value: self.settings.num_samples as f64,
                reason: "must be fewer than the trace's points",
            });
        }

        let (start, end) = signal.domain();
        if let (Some(&first), Some(&last)) = (self.timestamps.first(), self.timestamps.last()) {
            check_range(first, start, end)?;
            check_range(last, start, end)?;
        }

        let values = interpolate_many(&self.timestamps, signal.timestamps(), signal.values(), BoundaryPolicy::Strict)?;
        Ok(SampledSignal {
            timestamps: self.timestamps.clone(),
            values,
        })
    }
}

/// Acquire `num_samples` readings of `signal` at `sampling_rate` Hz
pub fn sample(signal: &ContinuousSignal, sampling_rate: f64, num_samples: usize) -> BalanceResult<SampledSignal> {
    Sampler::new(AcquisitionSettings::new(sampling_rate, num_samples))?.sample(signal)
}
