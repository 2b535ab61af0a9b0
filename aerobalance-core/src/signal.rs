//! Virtual Balance: Pseudo-Analog Signal Synthesis
//!
//! ## What it simulates
//!
//! A real balance presents three load-cell voltages and a micromanometer
//! reading that a data-acquisition board samples. The virtual balance
//! recreates those four traces for any angle of attack covered by a
//! historical tunnel run:
//!
//! ```text
//! angle ──► HistoricalDataset::readings_at ──► level per channel
//!                                                  │
//!                    NoiseSource (N(0,1)) × σ ─────┤
//!                                                  ▼
//!                             level + σ·z(t)  on a uniform time grid
//! ```
//!
//! The tare angle reads the stored wind-off row directly. Every other angle
//! is interpolated over the data rows.
//!
//! ## Noise model
//!
//! Each sample gets independent zero-mean Gaussian noise. Standard deviations
//! observed on the real instruments:
//!
//! ```text
//! Channel            σ             Variance
//! ------------------------------------------
//! Fore cell          0.00707 V     5e-5 V²
//! Drag cell          0.0316 V      1e-3 V²
//! Aft cell           0.00707 V     5e-5 V²
//! Micromanometer     0.01 Pa       1e-4 Pa²
//! ```
//!
//! ## Time base
//!
//! Traces cover `[0, duration]` with `resolution` points, endpoints included.
//! The default is 10 s at 1,000,000 points (10 µs spacing). The grid is built
//! once per synthesizer and shared by every trace it produces.
//!
//! ```rust
//! use aerobalance_core::{HistoricalDataset, SignalSynthesizer, SignalConfig, ZeroNoise};
//!
//! let dataset = HistoricalDataset::from_rows(&[
//!     [0.0; 8],
//!     [10.0, 0.5, 0.2, 0.3, 0.0, 0.0, 0.0, 500.0],
//! ])?;
//!
//! let synth = SignalSynthesizer::new(SignalConfig::new(1.0, 1001))?;
//! let signals = synth.synthesize(10.0, &dataset, &mut ZeroNoise)?;
//! assert!(signals.fore.values().iter().all(|&v| v == 0.5));
//! # Ok::<(), aerobalance_core::BalanceError>(())
//! ```

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        acquisition::{SIGNAL_DURATION_S, SIGNAL_RESOLUTION, MIN_SIGNAL_RESOLUTION},
        instruments::{FORE_NOISE_STD_V, DRAG_NOISE_STD_V, AFT_NOISE_STD_V, DYNAMIC_PRESSURE_NOISE_STD_PA},
    },
    dataset::{Channel, HistoricalDataset},
    errors::{BalanceError, BalanceResult},
    interpolation::{linspace, BoundaryPolicy},
    traits::NoiseSource,
    validation::{check_non_negative, check_positive},
};

/// Duration and point count of the synthesized traces
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SignalConfig {
    /// Trace length in seconds
    pub duration_s: f64,
    /// Number of points, endpoints included
    pub resolution: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            duration_s: SIGNAL_DURATION_S,
            resolution: SIGNAL_RESOLUTION,
        }
    }
}

impl SignalConfig {
    /// Custom time base
    pub fn new(duration_s: f64, resolution: usize) -> Self {
        Self { duration_s, resolution }
    }

    /// Check that the time base defines at least one interval
    pub fn validate(&self) -> BalanceResult<()> {
        check_positive("signal_duration", self.duration_s)?;
        if self.resolution < MIN_SIGNAL_RESOLUTION {
            return Err(BalanceError::InvalidParameter {
                parameter: "signal_resolution",
                value: self.resolution as f64,
                reason: "must be at least 2 points",
            });
        }
        Ok(())
    }
}

/// Per-channel noise standard deviations
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct NoiseProfile {
    /// Fore cell σ (V)
    pub fore: f64,
    /// Drag cell σ (V)
    pub drag: f64,
    /// Aft cell σ (V)
    pub aft: f64,
    /// Micromanometer σ (Pa)
    pub dynamic_pressure: f64,
}

impl Default for NoiseProfile {
    fn default() -> Self {
        Self {
            fore: FORE_NOISE_STD_V,
            drag: DRAG_NOISE_STD_V,
            aft: AFT_NOISE_STD_V,
            dynamic_pressure: DYNAMIC_PRESSURE_NOISE_STD_PA,
        }
    }
}

impl NoiseProfile {
    /// Noiseless instruments
    pub fn silent() -> Self {
        Self { fore: 0.0, drag: 0.0, aft: 0.0, dynamic_pressure: 0.0 }
    }

    /// Same σ on every channel
    pub fn uniform(std_dev: f64) -> Self {
        Self { fore: std_dev, drag: std_dev, aft: std_dev, dynamic_pressure: std_dev }
    }

    /// σ for one channel
    pub fn std_dev(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Fore => self.fore,
            Channel::Drag => self.drag,
            Channel::Aft => self.aft,
            Channel::DynamicPressure => self.dynamic_pressure,
        }
    }

    /// Check that no σ is negative or non-finite
    pub fn validate(&self) -> BalanceResult<()> {
        check_non_negative("fore_noise", self.fore)?;
        check_non_negative("drag_noise", self.drag)?;
        check_non_negative("aft_noise", self.aft)?;
        check_non_negative("dynamic_pressure_noise", self.dynamic_pressure)
    }
}

/// Densely sampled trace: timestamps and values of equal length
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousSignal {
    timestamps: Arc<[f64]>,
    values: Vec<f64>,
}

impl ContinuousSignal {
    /// Build a trace from explicit points
    ///
    /// Timestamps must be strictly increasing and match `values` in length;
    /// at least two points are required.
    pub fn new(timestamps: impl Into<Arc<[f64]>>, values: Vec<f64>) -> BalanceResult<Self> {
        let timestamps = timestamps.into();
        if timestamps.len() != values.len() {
            return Err(BalanceError::InvalidParameter {
                parameter: "signal_values",
                value: values.len() as f64,
                reason: "length must match timestamps",
            });
        }
        if timestamps.len() < MIN_SIGNAL_RESOLUTION {
            return Err(BalanceError::InsufficientData {
                required: MIN_SIGNAL_RESOLUTION,
                available: timestamps.len(),
            });
        }
        if let Some(i) = timestamps.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(BalanceError::InvalidParameter {
                parameter: "signal_timestamps",
                value: timestamps[i + 1],
                reason: "must be strictly increasing",
            });
        }
        Ok(Self { timestamps, values })
    }

    /// Sample instants in seconds
    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    /// Trace values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// First and last timestamp
    pub fn domain(&self) -> (f64, f64) {
        (self.timestamps[0], self.timestamps[self.timestamps.len() - 1])
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed trace
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The four traces produced for one angle
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSignals {
    /// Fore cell (V)
    pub fore: ContinuousSignal,
    /// Drag cell (V)
    pub drag: ContinuousSignal,
    /// Aft cell (V)
    pub aft: ContinuousSignal,
    /// Micromanometer (Pa)
    pub dynamic_pressure: ContinuousSignal,
}

impl ChannelSignals {
    /// Trace for one channel
    pub fn get(&self, channel: Channel) -> &ContinuousSignal {
        match channel {
            Channel::Fore => &self.fore,
            Channel::Drag => &self.drag,
            Channel::Aft => &self.aft,
            Channel::DynamicPressure => &self.dynamic_pressure,
        }
    }
}

/// Virtual balance producing noisy traces from a historical dataset
#[derive(Debug, Clone)]
pub struct SignalSynthesizer {
    config: SignalConfig,
    noise: NoiseProfile,
    boundary: BoundaryPolicy,
    time_base: Arc<[f64]>,
}

impl SignalSynthesizer {
    /// Synthesizer with the given time base and reference noise levels
    pub fn new(config: SignalConfig) -> BalanceResult<Self> {
        config.validate()?;
        let time_base: Arc<[f64]> = linspace(0.0, config.duration_s, config.resolution).into();
        Ok(Self {
            config,
            noise: NoiseProfile::default(),
            boundary: BoundaryPolicy::default(),
            time_base,
        })
    }

    /// Override the per-channel noise levels
    pub fn with_noise_profile(mut self, noise: NoiseProfile) -> BalanceResult<Self> {
        noise.validate()?;
        self.noise = noise;
        Ok(self)
    }

    /// Choose how angles outside the data rows are handled
    pub fn with_boundary_policy(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Active time base configuration
    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Active noise levels
    pub fn noise_profile(&self) -> &NoiseProfile {
        &self.noise
    }

    /// Active boundary policy
    pub fn boundary_policy(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// Shared time grid of every synthesized trace
    pub fn time_base(&self) -> &[f64] {
        &self.time_base
    }

    /// Produce the four noisy traces for `angle`
    ///
    /// Noise is drawn channel by channel in table order (fore, drag, aft,
    /// dynamic pressure), one deviate per point.
    pub fn synthesize<N: NoiseSource + ?Sized>(
        &self,
        angle: f64,
        dataset: &HistoricalDataset,
        noise: &mut N,
    ) -> BalanceResult<ChannelSignals> {
        let levels = dataset.readings_at(angle, self.boundary)?;

        let mut trace = |channel: Channel| {
            let mut values = vec![0.0; self.time_base.len()];
            noise.fill_around(levels.get(channel), self.noise.std_dev(channel), &mut values);
            ContinuousSignal {
                timestamps: Arc::clone(&self.time_base),
                values,
            }
        };

        Ok(ChannelSignals {
            fore: trace(Channel::Fore),
            drag: trace(Channel::Drag),
            aft: trace(Channel::Aft),
            dynamic_pressure: trace(Channel::DynamicPressure),
        })
    }
}
