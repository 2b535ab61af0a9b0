//! Run Configuration, Dataset Loading and Reports
//!
//! ## Overview
//!
//! The core crate reduces sweeps from values already in memory. This crate
//! connects it to files:
//!
//! ```text
//! config.json ──► ReductionConfig ─┐
//!                                  ├──► run() ──► SweepResult ──► report.csv / report.json
//! balance.csv ──► HistoricalDataset┘
//! ```
//!
//! ## Configuration
//!
//! A run is described by one JSON document. Every section is optional and
//! falls back to the reference setup (tare at −15°, sweep −15° to 15° in 1°
//! steps, 1000 samples at 1 kHz, 95 % confidence):
//!
//! ```json
//! {
//!   "calibration": { "lift": 131.1, "drag": 90.5, "moment": 8.56 },
//!   "sweep": { "tare_angle": -15.0, "angle_start": -10.0, "angle_end": 10.0, "angle_step": 0.5 },
//!   "acquisition": { "sampling_rate": 1000.0, "num_samples": 500 },
//!   "confidence_pct": 99.0,
//!   "boundary": "clamp",
//!   "seed": 42
//! }
//! ```
//!
//! ## Dataset files
//!
//! Comma-separated numeric tables. The first record is the wind-off tare
//! row; a leading header line and `#` comment lines are skipped. See
//! [`loader`] for details.
//!
//! ## Usage Example
//!
//! ```rust
//! use aerobalance_schemas::{parse_dataset, run, write_report_csv, ReductionConfig};
//!
//! let table = "\
//! angle,fore,drag,aft,c4,c5,c6,q
//! 0,0,0,0,0,0,0,0
//! 10,0.5,0.2,0.3,0,0,0,500
//! ";
//! let dataset = parse_dataset(table.as_bytes())?;
//!
//! let config = ReductionConfig::from_json_str(r#"{
//!     "signal": { "duration_s": 1.0, "resolution": 10001 },
//!     "sweep": { "tare_angle": 0.0, "angle_start": 10.0, "angle_end": 10.0, "angle_step": 1.0 },
//!     "acquisition": { "sampling_rate": 1000.0, "num_samples": 100 },
//!     "seed": 7
//! }"#)?;
//!
//! let result = run(&config, &dataset)?;
//! let mut report = Vec::new();
//! write_report_csv(&result, &mut report)?;
//! assert!(String::from_utf8_lossy(&report).starts_with("angle,lift,lift_error"));
//! # Ok::<(), aerobalance_schemas::SchemaError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

use aerobalance_core::{BalanceError, GaussianNoise, HistoricalDataset, SweepResult};

pub mod config;
pub mod loader;
pub mod report;

pub use config::ReductionConfig;
pub use loader::{load_dataset, parse_dataset};
pub use report::{report_json, write_report_csv, write_report_json};

/// Result type for file-facing operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors from loading, parsing and reporting
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    /// File could not be opened, read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited text
    #[error("Failed to read table: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed or mistyped JSON
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A table cell that is not a number
    #[error("Row {row}, column {column}: {value:?} is not a number")]
    InvalidNumber {
        /// Table row, 0 being the tare row
        row: usize,
        /// Zero-based column
        column: usize,
        /// Cell text as read
        value: String,
    },

    /// Rejected by the reduction engine
    #[error("Reduction failed: {0}")]
    Balance(#[from] BalanceError),
}

/// Reduce `dataset` with the settings in `config`
///
/// Uses a noise source seeded from `config.seed`, or from system entropy
/// when no seed is given.
pub fn run(config: &ReductionConfig, dataset: &HistoricalDataset) -> SchemaResult<SweepResult> {
    let reducer = config.reducer()?;
    let mut noise = match config.seed {
        Some(seed) => GaussianNoise::seeded(seed),
        None => {
            log::info!("No seed configured, drawing noise from system entropy");
            GaussianNoise::from_entropy()
        }
    };

    let result = reducer.reduce(dataset, &config.sweep, &config.acquisition, config.confidence_pct, &mut noise)?;
    Ok(result)
}
