//! Load a rate schedule from a tabular file
//!
//! A missing file is not an error: the caller falls back to the flat
//! configured rate.

use super::{RateEntry, RateSchedule};
use crate::entry::loader::{delimiter_for, parse_amount, parse_date};
use crate::error::{LedgerError, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Load a schedule, or `None` when the file does not exist
pub fn load_schedule<P: AsRef<Path>>(path: P) -> Result<Option<RateSchedule>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let delimiter = delimiter_for(path)?;
    let file = File::open(path)?;
    load_schedule_from_reader(file, delimiter).map(Some)
}

/// Load a schedule from any reader
///
/// Rows after the header are positional: date, annual rate as a fraction.
pub fn load_schedule_from_reader<R: std::io::Read>(
    reader: R,
    delimiter: u8,
) -> Result<RateSchedule> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();

    for (i, result) in csv_reader.records().enumerate() {
        let record = result?;
        let row = i + 2;

        let date_cell = record
            .get(0)
            .ok_or_else(|| LedgerError::Parse(format!("row {}: missing date column", row)))?;
        let rate_cell = record
            .get(1)
            .ok_or_else(|| LedgerError::Parse(format!("row {}: missing rate column", row)))?;

        entries.push(RateEntry {
            date: parse_date(date_cell, row)?,
            annual_rate: parse_amount(rate_cell, row)?,
        });
    }

    Ok(RateSchedule::from_entries(entries))
}
