//! Sweep Reports
//!
//! Two formats:
//!
//! - CSV, one headed row per angle:
//!   `angle,lift,lift_error,drag,drag_error,moment,moment_error,dynamic_pressure,dynamic_pressure_error`
//! - JSON, the full [`SweepResult`] including tare offsets, the Student-t
//!   interval and acquisition times.

use std::io::Write;

use aerobalance_core::{SweepResult, SweepRow};
use serde::Serialize;

use crate::SchemaResult;

/// Flat CSV record for one angle
#[derive(Debug, Serialize)]
struct ReportRecord {
    angle: f64,
    lift: f64,
    lift_error: f64,
    drag: f64,
    drag_error: f64,
    moment: f64,
    moment_error: f64,
    dynamic_pressure: f64,
    dynamic_pressure_error: f64,
}

impl From<SweepRow> for ReportRecord {
    fn from(row: SweepRow) -> Self {
        Self {
            angle: row.angle,
            lift: row.lift.value,
            lift_error: row.lift.error,
            drag: row.drag.value,
            drag_error: row.drag.error,
            moment: row.moment.value,
            moment_error: row.moment.error,
            dynamic_pressure: row.dynamic_pressure.value,
            dynamic_pressure_error: row.dynamic_pressure.error,
        }
    }
}

/// Write one headed CSV row per angle
pub fn write_report_csv<W: Write>(result: &SweepResult, writer: W) -> SchemaResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in result.rows() {
        csv.serialize(ReportRecord::from(row))?;
    }
    csv.flush()?;
    Ok(())
}

/// Full result as pretty-printed JSON
pub fn report_json(result: &SweepResult) -> SchemaResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Write the full result as pretty-printed JSON
pub fn write_report_json<W: Write>(result: &SweepResult, writer: W) -> SchemaResult<()> {
    serde_json::to_writer_pretty(writer, result)?;
    Ok(())
}
