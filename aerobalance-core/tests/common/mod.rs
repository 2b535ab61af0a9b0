//! Shared fixtures for the integration tests
//!
//! Provides:
//! - Balance tables shaped like real tunnel runs
//! - A reducer on a short time base so sweeps stay fast
//! - Tolerance assertions

#![allow(dead_code)]

use aerobalance_core::{
    AcquisitionSettings, BalanceReducer, CalibrationConstants, HistoricalDataset, SignalConfig, SweepPlan,
};

/// Two-row table: wind-off tare at 0°, one data row at 10°
pub fn single_point_dataset() -> HistoricalDataset {
    HistoricalDataset::from_rows(&[
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [10.0, 0.5, 0.2, 0.3, 0.0, 0.0, 0.0, 500.0],
    ])
    .unwrap()
}

/// Lift-curve-like table from −15° to 15°, tare at −15°
///
/// Fore and aft grow linearly with angle, drag grows quadratically, and the
/// micromanometer drifts slightly around 500 Pa.
pub fn polar_dataset() -> HistoricalDataset {
    let mut rows = vec![[-15.0, 0.011, 0.021, 0.009, 0.0, 0.0, 0.0, 0.0]];
    for angle in (-15..=15).map(f64::from) {
        rows.push([
            angle,
            0.3 + 0.02 * angle,
            0.05 + 0.0004 * angle * angle,
            0.25 + 0.015 * angle,
            0.0,
            0.0,
            0.0,
            500.0 + 0.1 * angle,
        ]);
    }
    HistoricalDataset::from_rows(&rows).unwrap()
}

/// Reducer with datasheet calibration on a 1 s, 20,001-point time base
pub fn fast_reducer() -> BalanceReducer {
    BalanceReducer::new(CalibrationConstants::default(), SignalConfig::new(1.0, 20_001)).unwrap()
}

/// `n` samples at 1 kHz
pub fn acquisition(num_samples: usize) -> AcquisitionSettings {
    AcquisitionSettings::new(1000.0, num_samples)
}

/// Sweep of a single angle, tare at the dataset's tare angle
pub fn single_angle(dataset: &HistoricalDataset, angle: f64) -> SweepPlan {
    SweepPlan::new(dataset.tare_angle(), angle, angle, 1.0)
}

/// Assert `|actual − expected| ≤ tolerance`
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
