//! Balance Table Loader
//!
//! Reads the tunnel's balance table from comma-separated text:
//!
//! ```text
//! # wind-off tare, then one row per angle
//! angle, fore, drag, aft, c4, c5, c6, q
//! -15,   0.011, 0.021, 0.009, 0, 0, 0, 0
//! -15,   0.01,  0.05,  0.03,  0, 0, 0, 498.5
//! -14,   0.03,  0.05,  0.04,  0, 0, 0, 498.6
//! ```
//!
//! - Lines starting with `#` are skipped.
//! - A first record whose angle cell is not a number is taken as a header.
//! - Cells are trimmed; empty lines are ignored.
//! - Every remaining cell must parse as `f64`, including the columns the
//!   dataset ignores.
//!
//! Column layout and row checks are those of [`HistoricalDataset::from_rows`];
//! its row numbers count from the tare row, header excluded.

use std::{fs::File, io::Read, path::Path};

use aerobalance_core::{constants::dataset::ANGLE_COLUMN, HistoricalDataset};
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::{SchemaError, SchemaResult};

/// Read a balance table from a file
pub fn load_dataset(path: impl AsRef<Path>) -> SchemaResult<HistoricalDataset> {
    let path = path.as_ref();
    let dataset = parse_dataset(File::open(path)?)?;
    log::info!(
        "Loaded {} data rows from {} (tare at {}°)",
        dataset.len(),
        path.display(),
        dataset.tare_angle()
    );
    Ok(dataset)
}

/// Read a balance table from any byte stream
pub fn parse_dataset<R: Read>(input: R) -> SchemaResult<HistoricalDataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut header_seen = false;

    for record in reader.records() {
        let record = record?;
        if is_blank(&record) {
            continue;
        }

        if rows.is_empty() && !header_seen && is_header(&record) {
            log::debug!("Skipping header: {:?}", record);
            header_seen = true;
            continue;
        }

        rows.push(parse_row(&record, rows.len())?);
    }

    Ok(HistoricalDataset::from_rows(&rows)?)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

fn is_header(record: &StringRecord) -> bool {
    record
        .get(ANGLE_COLUMN)
        .is_some_and(|cell| cell.parse::<f64>().is_err())
}

fn parse_row(record: &StringRecord, row: usize) -> SchemaResult<Vec<f64>> {
    record
        .iter()
        .enumerate()
        .map(|(column, cell)| {
            cell.parse::<f64>().map_err(|_| SchemaError::InvalidNumber {
                row,
                column,
                value: cell.to_string(),
            })
        })
        .collect()
}
