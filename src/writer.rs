//! Write the accrual ledger to a tabular file
//!
//! Same extension dispatch as the loaders. When the destination already
//! exists and overwriting is disabled, the rows go to a sibling file with
//! a timestamp inserted before the extension and the original is left
//! untouched.

use crate::accrual::AccrualRow;
use crate::entry::loader::delimiter_for;
use crate::error::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use csv::WriterBuilder;
use log::warn;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Output row with the ledger's column captions
#[derive(Serialize)]
struct OutputRow<'a> {
    #[serde(rename = "Opis")]
    description: Option<&'a str>,
    #[serde(rename = "Data")]
    date: NaiveDate,
    #[serde(rename = "Kwota")]
    amount: String,
}

/// Insert a timestamp between the file stem and its extension
fn timestamped(path: &Path, at: NaiveDateTime) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_{}.{}", stem, at.format("%Y%m%d_%H%M%S"), ext),
        None => format!("{}_{}", stem, at.format("%Y%m%d_%H%M%S")),
    };
    path.with_file_name(name)
}

/// Pick the path actually written, honoring the overwrite setting
fn resolve_destination(path: &Path, overwrite: bool) -> PathBuf {
    if overwrite || !path.exists() {
        path.to_path_buf()
    } else {
        timestamped(path, Local::now().naive_local())
    }
}

/// Write all rows to the destination path
///
/// Returns the path actually written, which differs from `path` when an
/// existing file was preserved.
pub fn write_ledger<P: AsRef<Path>>(
    rows: &[AccrualRow],
    path: P,
    overwrite: bool,
) -> Result<PathBuf> {
    let path = path.as_ref();
    let delimiter = delimiter_for(path)?;

    let destination = resolve_destination(path, overwrite);
    if destination != path {
        warn!(
            "{} exists and overwrite is disabled, writing {}",
            path.display(),
            destination.display()
        );
    }

    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(&destination)?;

    for row in rows {
        writer.serialize(OutputRow {
            description: row.description.as_deref(),
            date: row.date,
            amount: format!("{:.2}", row.amount),
        })?;
    }
    writer.flush()?;

    Ok(destination)
}
