//! Run Configuration
//!
//! [`ReductionConfig`] gathers everything a sweep reduction needs besides
//! the dataset. It maps one-to-one onto a JSON document; every section is
//! optional and missing fields take the reference values.
//!
//! ```text
//! Section         Default
//! ------------------------------------------------------------
//! calibration     lift 131.1 N/V, drag 90.5 N/V, moment 8.56 N·m/V
//! noise           instrument σ (fore/aft 0.00707 V, drag 0.0316 V, q 0.01 Pa)
//! signal          10 s at 1,000,000 points
//! boundary        "strict"
//! acquisition     1000 Hz, 1000 samples
//! sweep           tare −15°, −15° to 15° by 1°
//! confidence_pct  95
//! seed            none (entropy)
//! ```
//!
//! Unknown keys are rejected, at the top level and inside every section, so
//! that a misspelled key does not silently fall back to its default.

use std::{fs, path::Path};

use aerobalance_core::{
    validation::check_percentage, AcquisitionSettings, BalanceReducer, BalanceResult, BoundaryPolicy,
    CalibrationConstants, NoiseProfile, SignalConfig, SweepPlan,
};
use serde::{Deserialize, Serialize};

use crate::SchemaResult;

/// Default confidence level (%)
pub const DEFAULT_CONFIDENCE_PCT: f64 = 95.0;

/// Everything that parameterizes one sweep reduction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReductionConfig {
    /// Voltage-to-load factors
    pub calibration: CalibrationConstants,
    /// Instrument noise levels
    pub noise: NoiseProfile,
    /// Trace time base
    pub signal: SignalConfig,
    /// Handling of angles outside the dataset
    pub boundary: BoundaryPolicy,
    /// Acquisition board settings
    pub acquisition: AcquisitionSettings,
    /// Tare angle and sweep
    pub sweep: SweepPlan,
    /// Confidence level in percent, inside (0, 100)
    pub confidence_pct: f64,
    /// Noise seed; `None` draws from system entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            calibration: CalibrationConstants::default(),
            noise: NoiseProfile::default(),
            signal: SignalConfig::default(),
            boundary: BoundaryPolicy::default(),
            acquisition: AcquisitionSettings::default(),
            sweep: SweepPlan::default(),
            confidence_pct: DEFAULT_CONFIDENCE_PCT,
            seed: None,
        }
    }
}

impl ReductionConfig {
    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let config = Self::from_json_str(&fs::read_to_string(path)?)?;
        log::debug!("Loaded reduction config from {}", path.display());
        Ok(config)
    }

    /// Pretty-printed JSON
    pub fn to_json_string(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every section without running anything
    ///
    /// Dataset-dependent checks (angles inside the table) happen when the
    /// sweep is reduced.
    pub fn validate(&self) -> BalanceResult<()> {
        self.calibration.validate()?;
        self.noise.validate()?;
        self.signal.validate()?;
        self.acquisition.validate()?;
        self.sweep.validate()?;
        check_percentage("confidence_pct", self.confidence_pct)
    }

    /// Reducer built from the calibration, time base, noise and boundary sections
    pub fn reducer(&self) -> BalanceResult<BalanceReducer> {
        Ok(BalanceReducer::new(self.calibration, self.signal)?
            .with_noise_profile(self.noise)?
            .with_boundary_policy(self.boundary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_is_reference_setup() {
        let config = ReductionConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ReductionConfig::default());
        assert_eq!(config.sweep.tare_angle, -15.0);
        assert_eq!(config.sweep.angle_end, 15.0);
        assert_eq!(config.acquisition.sampling_rate, 1000.0);
        assert_eq!(config.acquisition.num_samples, 1000);
        assert_eq!(config.confidence_pct, 95.0);
        assert_eq!(config.boundary, BoundaryPolicy::Strict);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = ReductionConfig::from_json_str(
            r#"{
                "calibration": { "lift": 120.0 },
                "acquisition": { "num_samples": 250 },
                "boundary": "clamp",
                "seed": 3
            }"#,
        )
        .unwrap();

        assert_eq!(config.calibration.lift, 120.0);
        assert_eq!(config.calibration.drag, 90.5);
        assert_eq!(config.acquisition.num_samples, 250);
        assert_eq!(config.acquisition.sampling_rate, 1000.0);
        assert_eq!(config.boundary, BoundaryPolicy::Clamp);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ReductionConfig::from_json_str(r#"{ "sweeep": {} }"#).is_err());
        assert!(ReductionConfig::from_json_str(r#"{ "boundary": "wrap" }"#).is_err());

        for nested in [
            r#"{ "sweep": { "angle_stpe": 0.5 } }"#,
            r#"{ "acquisition": { "num_sampels": 250 } }"#,
            r#"{ "calibration": { "lfit": 120.0 } }"#,
            r#"{ "noise": { "foer": 0.01 } }"#,
            r#"{ "signal": { "duration": 1.0 } }"#,
        ] {
            assert!(
                matches!(ReductionConfig::from_json_str(nested), Err(crate::SchemaError::Json(_))),
                "accepted {nested}"
            );
        }
    }

    #[test]
    fn json_survives_a_write_and_read() {
        let config = ReductionConfig {
            noise: NoiseProfile::uniform(0.25),
            confidence_pct: 99.0,
            seed: Some(11),
            ..ReductionConfig::default()
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(ReductionConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn validate_flags_bad_sections() {
        let mut config = ReductionConfig::default();
        config.confidence_pct = 100.0;
        assert!(config.validate().unwrap_err().is_configuration());

        let mut config = ReductionConfig::default();
        config.acquisition.sampling_rate = 20_000.0;
        assert!(config.validate().is_err());

        let mut config = ReductionConfig::default();
        config.sweep.angle_step = 0.0;
        assert!(config.validate().is_err());

        let config = ReductionConfig::from_json_str(r#"{ "sweep": { "angle_step": 1e-12 } }"#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(aerobalance_core::BalanceError::LimitExceeded { parameter: "angle_step", .. })
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "confidence_pct": 90.0 }}"#).unwrap();

        let config = ReductionConfig::from_file(file.path()).unwrap();
        assert_eq!(config.confidence_pct, 90.0);
        assert!(ReductionConfig::from_file(file.path().with_extension("missing")).is_err());
    }
}
