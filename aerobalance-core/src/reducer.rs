//! Balance Data Reduction
//!
//! ## Procedure
//!
//! The reducer reproduces the tunnel's measurement procedure end to end:
//!
//! ```text
//! 1. t = Student-t critical value for ν = n − 1 at the chosen confidence
//!
//! 2. Tare pass (wind off, tare angle)
//!    synthesize → sample fore/drag/aft → mean, σ
//!    offset error = t·σ/√n
//!
//! 3. Sweep pass, for every angle in [start, end] by step
//!    synthesize → sample all four channels → mean, σ
//!    cell reading   = mean − tare mean
//!    cell error     = √((t·σ/√n)² + offset error²)
//!    q∞ error       = max(0.01·q∞ + 1 Pa, t·σ/√n)
//!
//! 4. Calibration: cells → lift, drag, moment (see `calibration`)
//!
//! 5. Acquisition time = n / rate per angle, times the number of angles
//! ```
//!
//! The tare pass always completes before the first sweep angle. Angles are
//! then independent of each other; results stay aligned one-to-one with the
//! angle sequence.
//!
//! ## Failure
//!
//! Every parameter (sweep bounds, acquisition limits, confidence, every
//! swept angle against the dataset) is checked before any trace is
//! synthesized. Any failure aborts the run; no partial result is returned.
//!
//! ## Example
//!
//! ```rust
//! use aerobalance_core::{
//!     AcquisitionSettings, BalanceReducer, CalibrationConstants, GaussianNoise,
//!     HistoricalDataset, SignalConfig, SweepPlan,
//! };
//!
//! let dataset = HistoricalDataset::from_rows(&[
//!     [0.0; 8],
//!     [10.0, 0.5, 0.2, 0.3, 0.0, 0.0, 0.0, 500.0],
//! ])?;
//!
//! let reducer = BalanceReducer::new(CalibrationConstants::default(), SignalConfig::new(1.0, 100_001))?;
//! let result = reducer.reduce(
//!     &dataset,
//!     &SweepPlan::new(0.0, 10.0, 10.0, 1.0),
//!     &AcquisitionSettings::new(1000.0, 100),
//!     95.0,
//!     &mut GaussianNoise::seeded(1),
//! )?;
//!
//! assert_eq!(result.angles, vec![10.0]);
//! assert!((result.lift[0] - 0.8 * 131.1).abs() < 5.0 * result.lift_error[0]);
//! # Ok::<(), aerobalance_core::BalanceError>(())
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    calibration::{BalanceLoads, CalibrationConstants},
    constants::acquisition::MAX_SWEEP_ANGLES,
    dataset::{Channel, HistoricalDataset},
    errors::{BalanceError, BalanceResult},
    interpolation::BoundaryPolicy,
    sampler::{AcquisitionSettings, Sampler},
    signal::{ChannelSignals, NoiseProfile, SignalConfig, SignalSynthesizer},
    statistics::{dynamic_pressure_error, ChannelStatistics, ConfidenceInterval, MeasuredQuantity},
    traits::NoiseSource,
    validation::{check_finite, check_positive, check_range},
};

/// Relative slack when counting sweep steps, absorbs rounding in `(end − start) / step`
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Tare angle and angle-of-attack sweep
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SweepPlan {
    /// Angle at which the wind-off tare is read (degrees)
    pub tare_angle: f64,
    /// First swept angle (degrees)
    pub angle_start: f64,
    /// Last swept angle, included when reached by whole steps (degrees)
    pub angle_end: f64,
    /// Angle increment (degrees)
    pub angle_step: f64,
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self {
            tare_angle: -15.0,
            angle_start: -15.0,
            angle_end: 15.0,
            angle_step: 1.0,
        }
    }
}

impl SweepPlan {
    /// Sweep from `angle_start` to `angle_end` by `angle_step`
    pub fn new(tare_angle: f64, angle_start: f64, angle_end: f64, angle_step: f64) -> Self {
        Self { tare_angle, angle_start, angle_end, angle_step }
    }

    /// Check bounds, step and the resulting number of angles
    pub fn validate(&self) -> BalanceResult<()> {
        check_finite("tare_angle", self.tare_angle)?;
        check_finite("angle_start", self.angle_start)?;
        check_finite("angle_end", self.angle_end)?;
        check_positive("angle_step", self.angle_step)?;
        if self.angle_end < self.angle_start {
            return Err(BalanceError::InvalidParameter {
                parameter: "angle_end",
                value: self.angle_end,
                reason: "must not be below angle_start",
            });
        }

        // Checked in floating point, before any conversion to a count
        let count = self.step_count() + 1.0;
        if count > MAX_SWEEP_ANGLES as f64 {
            return Err(BalanceError::LimitExceeded {
                parameter: "angle_step",
                value: count,
                limit: MAX_SWEEP_ANGLES as f64,
            });
        }
        Ok(())
    }

    /// Swept angles: `start + k·step` for every `k` that stays within `end`
    pub fn angles(&self) -> BalanceResult<Vec<f64>> {
        self.validate()?;
        let steps = self.step_count() as usize;
        Ok((0..=steps)
            .map(|k| self.angle_start + self.angle_step * k as f64)
            .collect())
    }

    /// Whole steps from start to end, rounding slack included
    fn step_count(&self) -> f64 {
        let span = (self.angle_end - self.angle_start) / self.angle_step;
        (span + STEP_COUNT_TOLERANCE * span.max(1.0)).floor()
    }
}

/// Tare means with their offset errors, per load cell (V)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TareOffsets {
    /// Fore cell offset
    pub fore: MeasuredQuantity,
    /// Drag cell offset
    pub drag: MeasuredQuantity,
    /// Aft cell offset
    pub aft: MeasuredQuantity,
}

/// Corrected readings and loads at one angle
#[derive(Debug, Clone, Copy, PartialEq)]
struct AngleMeasurement {
    angle: f64,
    loads: BalanceLoads,
    dynamic_pressure: MeasuredQuantity,
}

/// Reduced sweep, one entry per angle in every sequence
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepResult {
    /// Angles of attack (degrees)
    pub angles: Vec<f64>,
    /// Lift (N)
    pub lift: Vec<f64>,
    /// Drag (N)
    pub drag: Vec<f64>,
    /// Pitching moment (N·m)
    pub moment: Vec<f64>,
    /// Lift error (N)
    pub lift_error: Vec<f64>,
    /// Drag error (N)
    pub drag_error: Vec<f64>,
    /// Pitching moment error (N·m)
    pub moment_error: Vec<f64>,
    /// Dynamic pressure (Pa)
    pub dynamic_pressure: Vec<f64>,
    /// Dynamic pressure error (Pa)
    pub dynamic_pressure_error: Vec<f64>,
    /// Acquisition time per angle (s)
    pub acquisition_time_per_point: f64,
    /// Acquisition time over the whole sweep (s)
    pub total_acquisition_time: f64,
    /// Interval used for every error bound
    pub confidence: ConfidenceInterval,
    /// Tare offsets subtracted from every cell reading
    pub tare: TareOffsets,
}

/// One angle of a [`SweepResult`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepRow {
    /// Angle of attack (degrees)
    pub angle: f64,
    /// Lift (N)
    pub lift: MeasuredQuantity,
    /// Drag (N)
    pub drag: MeasuredQuantity,
    /// Pitching moment (N·m)
    pub moment: MeasuredQuantity,
    /// Dynamic pressure (Pa)
    pub dynamic_pressure: MeasuredQuantity,
}

impl SweepResult {
    /// Number of swept angles
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// True for a sweep without angles
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Row view of angle `index`
    pub fn row(&self, index: usize) -> Option<SweepRow> {
        let angle = *self.angles.get(index)?;
        Some(SweepRow {
            angle,
            lift: MeasuredQuantity::new(self.lift[index], self.lift_error[index]),
            drag: MeasuredQuantity::new(self.drag[index], self.drag_error[index]),
            moment: MeasuredQuantity::new(self.moment[index], self.moment_error[index]),
            dynamic_pressure: MeasuredQuantity::new(self.dynamic_pressure[index], self.dynamic_pressure_error[index]),
        })
    }

    /// Rows in angle order
    pub fn rows(&self) -> impl Iterator<Item = SweepRow> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    fn from_measurements(
        measurements: Vec<AngleMeasurement>,
        acquisition: &AcquisitionSettings,
        confidence: ConfidenceInterval,
        tare: TareOffsets,
    ) -> Self {
        fn column(measurements: &[AngleMeasurement], f: impl Fn(&AngleMeasurement) -> f64) -> Vec<f64> {
            measurements.iter().map(f).collect()
        }
        let acquisition_time_per_point = acquisition.duration_s();

        Self {
            angles: column(&measurements, |m| m.angle),
            lift: column(&measurements, |m| m.loads.lift.value),
            drag: column(&measurements, |m| m.loads.drag.value),
            moment: column(&measurements, |m| m.loads.moment.value),
            lift_error: column(&measurements, |m| m.loads.lift.error),
            drag_error: column(&measurements, |m| m.loads.drag.error),
            moment_error: column(&measurements, |m| m.loads.moment.error),
            dynamic_pressure: column(&measurements, |m| m.dynamic_pressure.value),
            dynamic_pressure_error: column(&measurements, |m| m.dynamic_pressure.error),
            acquisition_time_per_point,
            total_acquisition_time: acquisition_time_per_point * measurements.len() as f64,
            confidence,
            tare,
        }
    }
}

/// Runs the tare and sweep passes and converts cell readings into loads
#[derive(Debug, Clone)]
pub struct BalanceReducer {
    calibration: CalibrationConstants,
    synthesizer: SignalSynthesizer,
}

impl BalanceReducer {
    /// Reducer with the given calibration and trace time base
    pub fn new(calibration: CalibrationConstants, signal: SignalConfig) -> BalanceResult<Self> {
        calibration.validate()?;
        Ok(Self {
            calibration,
            synthesizer: SignalSynthesizer::new(signal)?,
        })
    }

    /// Override the instrument noise levels
    pub fn with_noise_profile(mut self, noise: NoiseProfile) -> BalanceResult<Self> {
        self.synthesizer = self.synthesizer.with_noise_profile(noise)?;
        Ok(self)
    }

    /// Choose how angles outside the dataset are handled
    pub fn with_boundary_policy(mut self, boundary: BoundaryPolicy) -> Self {
        self.synthesizer = self.synthesizer.with_boundary_policy(boundary);
        self
    }

    /// Active calibration
    pub fn calibration(&self) -> &CalibrationConstants {
        &self.calibration
    }

    /// Underlying virtual balance
    pub fn synthesizer(&self) -> &SignalSynthesizer {
        &self.synthesizer
    }

    /// Reduce a full sweep
    pub fn reduce<N: NoiseSource + ?Sized>(
        &self,
        dataset: &HistoricalDataset,
        plan: &SweepPlan,
        acquisition: &AcquisitionSettings,
        confidence_pct: f64,
        noise: &mut N,
    ) -> BalanceResult<SweepResult> {
        let angles = plan.angles()?;
        let sampler = Sampler::new(*acquisition)?;
        let confidence = ConfidenceInterval::student_t(confidence_pct, acquisition.num_samples)?;
        self.check_run(dataset, plan, &angles, &sampler)?;

        log_debug!(
            "Student-t critical value {} (ν = {}, {}%)",
            confidence.t_critical,
            confidence.degrees_of_freedom,
            confidence_pct
        );

        let tare = self.tare(dataset, plan.tare_angle, &sampler, &confidence, noise)?;
        log_debug!(
            "Tare at {}°: fore {} ± {} V, drag {} ± {} V, aft {} ± {} V",
            plan.tare_angle,
            tare.fore.value,
            tare.fore.error,
            tare.drag.value,
            tare.drag.error,
            tare.aft.value,
            tare.aft.error
        );

        let measurements = angles
            .iter()
            .map(|&angle| self.measure_angle(angle, dataset, &sampler, &confidence, &tare, &mut *noise))
            .collect::<BalanceResult<Vec<_>>>()?;

        let result = SweepResult::from_measurements(measurements, acquisition, confidence, tare);
        log_info!(
            "Reduced {} angles from {}° to {}°, {} s of acquisition",
            result.len(),
            plan.angle_start,
            plan.angle_end,
            result.total_acquisition_time
        );
        Ok(result)
    }

    /// Read the wind-off offsets at the tare angle
    pub fn tare<N: NoiseSource + ?Sized>(
        &self,
        dataset: &HistoricalDataset,
        tare_angle: f64,
        sampler: &Sampler,
        confidence: &ConfidenceInterval,
        noise: &mut N,
    ) -> BalanceResult<TareOffsets> {
        let signals = self.synthesizer.synthesize(tare_angle, dataset, noise)?;
        let offset = |channel: Channel| -> BalanceResult<MeasuredQuantity> {
            let stats = acquire(&signals, channel, sampler)?;
            Ok(MeasuredQuantity::new(stats.mean, stats.error(confidence)))
        };

        Ok(TareOffsets {
            fore: offset(Channel::Fore)?,
            drag: offset(Channel::Drag)?,
            aft: offset(Channel::Aft)?,
        })
    }

    fn measure_angle<N: NoiseSource + ?Sized>(
        &self,
        angle: f64,
        dataset: &HistoricalDataset,
        sampler: &Sampler,
        confidence: &ConfidenceInterval,
        tare: &TareOffsets,
        noise: &mut N,
    ) -> BalanceResult<AngleMeasurement> {
        let signals = self.synthesizer.synthesize(angle, dataset, noise)?;
        let corrected = |channel: Channel, offset: MeasuredQuantity| -> BalanceResult<MeasuredQuantity> {
            let stats = acquire(&signals, channel, sampler)?;
            Ok(MeasuredQuantity::new(stats.mean, stats.error(confidence)).minus(offset))
        };

        let fore = corrected(Channel::Fore, tare.fore)?;
        let drag = corrected(Channel::Drag, tare.drag)?;
        let aft = corrected(Channel::Aft, tare.aft)?;

        let q = acquire(&signals, Channel::DynamicPressure, sampler)?;
        let dynamic_pressure = MeasuredQuantity::new(q.mean, dynamic_pressure_error(q.mean, q.error(confidence)));

        log_debug!(
            "α = {}°: fore {} V, drag {} V, aft {} V, q {} Pa",
            angle,
            fore.value,
            drag.value,
            aft.value,
            dynamic_pressure.value
        );

        Ok(AngleMeasurement {
            angle,
            loads: self.calibration.convert(fore, drag, aft),
            dynamic_pressure,
        })
    }

    /// Reject runs that would fail part-way, before synthesizing anything
    fn check_run(
        &self,
        dataset: &HistoricalDataset,
        plan: &SweepPlan,
        angles: &[f64],
        sampler: &Sampler,
    ) -> BalanceResult<()> {
        let policy = self.synthesizer.boundary_policy();
        dataset.readings_at(plan.tare_angle, policy)?;
        for &angle in angles {
            dataset.readings_at(angle, policy)?;
        }

        let config = self.synthesizer.config();
        if sampler.settings().num_samples >= config.resolution {
            return Err(BalanceError::InvalidParameter {
                parameter: "num_samples",
                value: sampler.settings().num_samples as f64,
                reason: "must be fewer than the trace's points",
            });
        }
        if let Some(&last) = sampler.timestamps().last() {
            check_range(last, 0.0, config.duration_s)?;
        }
        Ok(())
    }
}

fn acquire(signals: &ChannelSignals, channel: Channel, sampler: &Sampler) -> BalanceResult<ChannelStatistics> {
    let sampled = sampler.sample(signals.get(channel))?;
    ChannelStatistics::from_samples(sampled.values())
}

/// Reduce a sweep with datasheet calibration and the reference time base
#[allow(clippy::too_many_arguments)]
pub fn reduce<N: NoiseSource + ?Sized>(
    dataset: &HistoricalDataset,
    tare_angle: f64,
    angle_start: f64,
    angle_end: f64,
    angle_step: f64,
    sampling_rate: f64,
    num_samples: usize,
    confidence_pct: f64,
    noise: &mut N,
) -> BalanceResult<SweepResult> {
    BalanceReducer::new(CalibrationConstants::default(), SignalConfig::default())?.reduce(
        dataset,
        &SweepPlan::new(tare_angle, angle_start, angle_end, angle_step),
        &AcquisitionSettings::new(sampling_rate, num_samples),
        confidence_pct,
        noise,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{GaussianNoise, ZeroNoise};

    fn dataset() -> HistoricalDataset {
        HistoricalDataset::from_rows(&[
            [-15.0, 0.01, 0.02, 0.03, 0.0, 0.0, 0.0, 0.0],
            [-10.0, -0.2, 0.10, -0.1, 0.0, 0.0, 0.0, 480.0],
            [0.0, 0.1, 0.05, 0.08, 0.0, 0.0, 0.0, 490.0],
            [10.0, 0.5, 0.20, 0.3, 0.0, 0.0, 0.0, 500.0],
        ])
        .unwrap()
    }

    fn reducer() -> BalanceReducer {
        BalanceReducer::new(CalibrationConstants::default(), SignalConfig::new(1.0, 20_001)).unwrap()
    }

    #[test]
    fn sweep_angles_are_inclusive() {
        let plan = SweepPlan::new(0.0, -10.0, 10.0, 2.5);
        assert_eq!(plan.angles().unwrap(), vec![-10.0, -7.5, -5.0, -2.5, 0.0, 2.5, 5.0, 7.5, 10.0]);

        let plan = SweepPlan::new(0.0, 0.0, 1.0, 0.1);
        let angles = plan.angles().unwrap();
        assert_eq!(angles.len(), 11);
        assert!((angles[10] - 1.0).abs() < 1e-12);

        let plan = SweepPlan::new(0.0, 0.0, 1.0, 0.3);
        assert_eq!(plan.angles().unwrap().len(), 4);

        assert_eq!(SweepPlan::new(0.0, 5.0, 5.0, 1.0).angles().unwrap(), vec![5.0]);
    }

    #[test]
    fn rejects_bad_sweeps() {
        assert!(SweepPlan::new(0.0, 0.0, 10.0, 0.0).validate().unwrap_err().is_configuration());
        assert!(SweepPlan::new(0.0, 0.0, 10.0, -1.0).validate().is_err());
        assert!(SweepPlan::new(0.0, 10.0, 0.0, 1.0).validate().is_err());
        assert!(SweepPlan::new(f64::NAN, 0.0, 1.0, 1.0).validate().is_err());
    }

    #[test]
    fn rejects_sweeps_with_too_many_angles() {
        let err = SweepPlan::new(0.0, 0.0, 30.0, 1e-12).angles().unwrap_err();
        assert!(err.is_configuration());
        assert!(matches!(err, BalanceError::LimitExceeded { parameter: "angle_step", .. }));

        let err = SweepPlan::new(0.0, -1e300, 1e300, 1.0).validate().unwrap_err();
        assert!(matches!(err, BalanceError::LimitExceeded { parameter: "angle_step", .. }));

        // Exactly at the cap is still allowed
        let plan = SweepPlan::new(0.0, 0.0, (MAX_SWEEP_ANGLES - 1) as f64, 1.0);
        assert_eq!(plan.angles().unwrap().len(), MAX_SWEEP_ANGLES);
    }

    #[test]
    fn clamped_sweep_to_huge_end_is_rejected() {
        let err = reducer()
            .with_boundary_policy(BoundaryPolicy::Clamp)
            .reduce(
                &dataset(),
                &SweepPlan::new(-15.0, 0.0, 1e15, 1.0),
                &AcquisitionSettings::new(1000.0, 100),
                95.0,
                &mut ZeroNoise,
            )
            .unwrap_err();
        assert!(matches!(err, BalanceError::LimitExceeded { parameter: "angle_step", .. }));
    }

    #[test]
    fn noiseless_sweep_is_exact() {
        let result = reducer()
            .reduce(
                &dataset(),
                &SweepPlan::new(-15.0, -10.0, 10.0, 10.0),
                &AcquisitionSettings::new(1000.0, 100),
                95.0,
                &mut ZeroNoise,
            )
            .unwrap();

        assert_eq!(result.angles, vec![-10.0, 0.0, 10.0]);
        let calib = CalibrationConstants::default();
        // α = 10°: fore 0.5 − 0.01, drag 0.2 − 0.02, aft 0.3 − 0.03
        assert!((result.lift[2] - (0.49 + 0.27) * calib.lift).abs() < 1e-9);
        assert!((result.drag[2] - 0.18 * calib.drag).abs() < 1e-9);
        assert!((result.moment[2] - (0.49 - 0.27) * calib.moment).abs() < 1e-9);
        assert!(result.lift_error.iter().all(|&e| e < 1e-9));
        // floor: 1 % of 500 Pa + 1 Pa
        assert!((result.dynamic_pressure_error[2] - 6.0).abs() < 1e-9);
    }

    #[test]
    fn errors_combine_tare_and_reading() {
        let result = reducer()
            .reduce(
                &dataset(),
                &SweepPlan::new(-15.0, 0.0, 0.0, 1.0),
                &AcquisitionSettings::new(1000.0, 200),
                95.0,
                &mut GaussianNoise::seeded(5),
            )
            .unwrap();

        let row = result.row(0).unwrap();
        // Lift error is at least the tare contribution of both cells
        let tare_only = (result.tare.fore.error.powi(2) + result.tare.aft.error.powi(2)).sqrt() * 131.1;
        assert!(row.lift.error > tare_only);
        assert!(row.drag.error > result.tare.drag.error * 90.5);
    }

    #[test]
    fn acquisition_time_accumulates() {
        let result = reducer()
            .reduce(
                &dataset(),
                &SweepPlan::new(-15.0, -10.0, 10.0, 5.0),
                &AcquisitionSettings::new(2000.0, 500),
                90.0,
                &mut ZeroNoise,
            )
            .unwrap();
        assert_eq!(result.len(), 5);
        assert_eq!(result.acquisition_time_per_point, 0.25);
        assert_eq!(result.total_acquisition_time, 1.25);
    }

    #[test]
    fn out_of_range_sweep_fails_before_synthesis() {
        let err = reducer()
            .reduce(
                &dataset(),
                &SweepPlan::new(-15.0, -10.0, 12.0, 1.0),
                &AcquisitionSettings::new(1000.0, 100),
                95.0,
                &mut ZeroNoise,
            )
            .unwrap_err();
        assert_eq!(err, BalanceError::OutOfDomain { value: 11.0, min: -10.0, max: 10.0 });
    }

    #[test]
    fn clamped_sweep_reaches_past_the_table() {
        let result = reducer()
            .with_boundary_policy(BoundaryPolicy::Clamp)
            .reduce(
                &dataset(),
                &SweepPlan::new(-15.0, 10.0, 12.0, 1.0),
                &AcquisitionSettings::new(1000.0, 100),
                95.0,
                &mut ZeroNoise,
            )
            .unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result.lift[0], result.lift[2]);
    }

    #[test]
    fn acquisition_longer_than_trace_is_rejected() {
        // 2 s window on a 1 s trace
        let err = reducer()
            .reduce(
                &dataset(),
                &SweepPlan::new(-15.0, 0.0, 0.0, 1.0),
                &AcquisitionSettings::new(1000.0, 2000),
                95.0,
                &mut ZeroNoise,
            )
            .unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn rejects_bad_confidence_and_samples() {
        let run = |confidence: f64, samples: usize| {
            reducer().reduce(
                &dataset(),
                &SweepPlan::new(-15.0, 0.0, 0.0, 1.0),
                &AcquisitionSettings::new(1000.0, samples),
                confidence,
                &mut ZeroNoise,
            )
        };
        assert!(run(0.0, 100).unwrap_err().is_configuration());
        assert!(run(100.0, 100).unwrap_err().is_configuration());
        assert!(run(95.0, 1).unwrap_err().is_configuration());
    }

    #[test]
    fn rows_align_with_columns() {
        let result = reducer()
            .reduce(
                &dataset(),
                &SweepPlan::new(-15.0, -10.0, 10.0, 10.0),
                &AcquisitionSettings::new(1000.0, 50),
                95.0,
                &mut GaussianNoise::seeded(9),
            )
            .unwrap();
        let rows: Vec<SweepRow> = result.rows().collect();
        assert_eq!(rows.len(), 3);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.angle, result.angles[i]);
            assert_eq!(row.moment.error, result.moment_error[i]);
            assert_eq!(row.dynamic_pressure.value, result.dynamic_pressure[i]);
        }
        assert!(result.row(3).is_none());
    }
}
