//! Historical Balance Dataset
//!
//! ## Layout
//!
//! The dataset is the table of readings recorded during a real tunnel run,
//! one row per angle of attack:
//!
//! ```text
//! col:   0       1      2      3     4..6      7
//!        angle   fore   drag   aft   (unused)  q∞
//!        [deg]   [V]    [V]    [V]             [Pa]
//!
//! row 0  tare reading, tunnel off (q∞ = 0)
//! row 1  first data angle
//! ...
//! row N  last data angle
//! ```
//!
//! Row 0 is the wind-off reading used to tare the balance. Rows 1..N must
//! have strictly increasing angles so they can be interpolated.
//!
//! The table is validated once on construction and is read-only afterwards.
//!
//! ```rust
//! use aerobalance_core::{HistoricalDataset, interpolation::BoundaryPolicy};
//!
//! let dataset = HistoricalDataset::from_rows(&[
//!     [-15.0, 0.01, 0.02, 0.01, 0.0, 0.0, 0.0, 0.0],
//!     [0.0, 0.10, 0.05, 0.08, 0.0, 0.0, 0.0, 480.0],
//!     [10.0, 0.50, 0.20, 0.30, 0.0, 0.0, 0.0, 500.0],
//! ])?;
//!
//! let readings = dataset.readings_at(5.0, BoundaryPolicy::Strict)?;
//! assert!((readings.fore - 0.30).abs() < 1e-12);
//! # Ok::<(), aerobalance_core::BalanceError>(())
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::dataset::{
        ANGLE_COLUMN, FORE_COLUMN, DRAG_COLUMN, AFT_COLUMN, DYNAMIC_PRESSURE_COLUMN,
        MIN_COLUMNS, TARE_ROW,
    },
    errors::{BalanceError, BalanceResult},
    interpolation::{interpolate, BoundaryPolicy},
    traits::Validatable,
};

/// One of the four instrument channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Channel {
    /// Fore load cell (V)
    Fore,
    /// Drag load cell (V)
    Drag,
    /// Aft load cell (V)
    Aft,
    /// Micromanometer (Pa)
    DynamicPressure,
}

impl Channel {
    /// All channels in table order
    pub const ALL: [Channel; 4] = [Channel::Fore, Channel::Drag, Channel::Aft, Channel::DynamicPressure];

    /// Column holding this channel in the historical table
    pub const fn column(self) -> usize {
        match self {
            Channel::Fore => FORE_COLUMN,
            Channel::Drag => DRAG_COLUMN,
            Channel::Aft => AFT_COLUMN,
            Channel::DynamicPressure => DYNAMIC_PRESSURE_COLUMN,
        }
    }

    /// Short name for logs and reports
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Fore => "fore",
            Channel::Drag => "drag",
            Channel::Aft => "aft",
            Channel::DynamicPressure => "dynamic_pressure",
        }
    }
}

/// Instrument levels at one angle, before noise
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelReadings {
    /// Fore load cell (V)
    pub fore: f64,
    /// Drag load cell (V)
    pub drag: f64,
    /// Aft load cell (V)
    pub aft: f64,
    /// Dynamic pressure (Pa)
    pub dynamic_pressure: f64,
}

impl ChannelReadings {
    /// Reading for one channel
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Fore => self.fore,
            Channel::Drag => self.drag,
            Channel::Aft => self.aft,
            Channel::DynamicPressure => self.dynamic_pressure,
        }
    }
}

/// Validated, read-only balance table
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalDataset {
    tare_angle: f64,
    tare: ChannelReadings,
    angles: Vec<f64>,
    fore: Vec<f64>,
    drag: Vec<f64>,
    aft: Vec<f64>,
    dynamic_pressure: Vec<f64>,
}

impl HistoricalDataset {
    /// Build a dataset from parsed table rows
    ///
    /// Row 0 is the tare reading; at least one data row must follow. Extra
    /// columns beyond the dynamic pressure column are ignored.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> BalanceResult<Self> {
        if rows.len() < 2 {
            return Err(BalanceError::InsufficientData { required: 2, available: rows.len() });
        }

        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() < MIN_COLUMNS {
                return Err(BalanceError::MalformedDataset {
                    row: index,
                    reason: "fewer than 8 columns",
                });
            }
            let used = [
                row[ANGLE_COLUMN],
                row[FORE_COLUMN],
                row[DRAG_COLUMN],
                row[AFT_COLUMN],
                row[DYNAMIC_PRESSURE_COLUMN],
            ];
            if !used[..].is_valid() {
                return Err(BalanceError::MalformedDataset {
                    row: index,
                    reason: "non-finite cell",
                });
            }
        }

        let tare_row = rows[TARE_ROW].as_ref();
        let tare = read_row(tare_row);
        if tare.dynamic_pressure != 0.0 {
            log_warn!(
                "Tare row dynamic pressure is {} Pa, expected a wind-off reading",
                tare.dynamic_pressure
            );
        }

        let data = &rows[TARE_ROW + 1..];
        let column = |col: usize| -> Vec<f64> { data.iter().map(|r| r.as_ref()[col]).collect() };
        let angles = column(ANGLE_COLUMN);

        if let Some(position) = angles.windows(2).position(|w| w[1] <= w[0]) {
            return Err(BalanceError::MalformedDataset {
                row: TARE_ROW + 2 + position,
                reason: "angles must be strictly increasing",
            });
        }

        let dataset = Self {
            tare_angle: tare_row[ANGLE_COLUMN],
            tare,
            fore: column(FORE_COLUMN),
            drag: column(DRAG_COLUMN),
            aft: column(AFT_COLUMN),
            dynamic_pressure: column(DYNAMIC_PRESSURE_COLUMN),
            angles,
        };

        log_debug!(
            "Loaded balance table: tare at {}°, {} data rows over [{}, {}]°",
            dataset.tare_angle,
            dataset.len(),
            dataset.angles[0],
            dataset.angles[dataset.len() - 1]
        );

        Ok(dataset)
    }

    /// Angle stored in the tare row
    pub fn tare_angle(&self) -> f64 {
        self.tare_angle
    }

    /// Readings stored in the tare row
    pub fn tare_readings(&self) -> ChannelReadings {
        self.tare
    }

    /// Data-row angles, strictly increasing
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Data-row values of one channel, aligned with [`angles`](Self::angles)
    pub fn column(&self, channel: Channel) -> &[f64] {
        match channel {
            Channel::Fore => &self.fore,
            Channel::Drag => &self.drag,
            Channel::Aft => &self.aft,
            Channel::DynamicPressure => &self.dynamic_pressure,
        }
    }

    /// Lowest and highest data-row angle
    pub fn angle_range(&self) -> (f64, f64) {
        (self.angles[0], self.angles[self.angles.len() - 1])
    }

    /// Number of data rows (tare row excluded)
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Always false: construction requires one data row
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Noise-free instrument levels at `angle`
    ///
    /// The tare angle returns the stored tare row as-is. Any other angle is
    /// interpolated over the data rows under `policy`.
    pub fn readings_at(&self, angle: f64, policy: BoundaryPolicy) -> BalanceResult<ChannelReadings> {
        if angle == self.tare_angle {
            return Ok(self.tare);
        }

        let at = |channel: Channel| interpolate(angle, &self.angles, self.column(channel), policy);
        Ok(ChannelReadings {
            fore: at(Channel::Fore)?,
            drag: at(Channel::Drag)?,
            aft: at(Channel::Aft)?,
            dynamic_pressure: at(Channel::DynamicPressure)?,
        })
    }
}

fn read_row(row: &[f64]) -> ChannelReadings {
    ChannelReadings {
        fore: row[FORE_COLUMN],
        drag: row[DRAG_COLUMN],
        aft: row[AFT_COLUMN],
        dynamic_pressure: row[DYNAMIC_PRESSURE_COLUMN],
    }
}
