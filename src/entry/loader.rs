//! Load ledger entries from tabular files
//!
//! Supported formats are comma-separated `.csv` and tab-separated `.tsv`.
//! Rows after the header are read positionally: description, date, amount.

use super::Entry;
use crate::error::{LedgerError, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Date format used across all input files
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field delimiter for a supported tabular file, by extension
pub fn delimiter_for(path: &Path) -> Result<u8> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => Ok(b','),
        "tsv" => Ok(b'\t'),
        _ => Err(LedgerError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Parse a date cell in ISO `YYYY-MM-DD` form
pub fn parse_date(cell: &str, row: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(cell.trim(), DATE_FORMAT)
        .map_err(|e| LedgerError::Parse(format!("row {}: date '{}': {}", row, cell, e)))
}

/// Parse a numeric cell
///
/// Accepts a comma decimal separator, which appears in exports from Polish
/// spreadsheet tools.
pub fn parse_amount(cell: &str, row: usize) -> Result<f64> {
    cell.trim()
        .replace(',', ".")
        .parse()
        .map_err(|e| LedgerError::Parse(format!("row {}: number '{}': {}", row, cell, e)))
}

/// Load all entries from a tabular file
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    let delimiter = delimiter_for(path)?;
    let file = File::open(path)?;
    load_entries_from_reader(file, delimiter)
}

/// Load entries from any reader (e.g. a string buffer)
pub fn load_entries_from_reader<R: std::io::Read>(reader: R, delimiter: u8) -> Result<Vec<Entry>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();

    for (i, result) in csv_reader.records().enumerate() {
        let record = result?;
        // Header is row 1; data rows are numbered from 2 in diagnostics
        let row = i + 2;

        let description = match record.get(0).map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(text.to_string()),
        };
        let date_cell = record
            .get(1)
            .ok_or_else(|| LedgerError::Parse(format!("row {}: missing date column", row)))?;
        let amount_cell = record
            .get(2)
            .ok_or_else(|| LedgerError::Parse(format!("row {}: missing amount column", row)))?;

        entries.push(Entry {
            description,
            date: parse_date(date_cell, row)?,
            amount: parse_amount(amount_cell, row)?,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_csv_rows() {
        let data = "Opis,Data,Kwota\nloan,2022-03-15,1500.00\n,2023-01-01,200\n";
        let entries = load_entries_from_reader(data.as_bytes(), b',').unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description.as_deref(), Some("loan"));
        assert_eq!(
            entries[0].date,
            NaiveDate::from_ymd_opt(2022, 3, 15).unwrap()
        );
        assert!((entries[0].amount - 1500.0).abs() < 1e-12);
        assert_eq!(entries[1].description, None);
    }

    #[test]
    fn test_comma_decimal_separator() {
        let data = "Opis\tData\tKwota\nx\t2022-03-15\t1500,75\n";
        let entries = load_entries_from_reader(data.as_bytes(), b'\t').unwrap();
        assert!((entries[0].amount - 1500.75).abs() < 1e-12);
    }

    #[test]
    fn test_malformed_date_is_parse_error() {
        let data = "Opis,Data,Kwota\nx,15/03/2022,100\n";
        let err = load_entries_from_reader(data.as_bytes(), b',').unwrap_err();
        assert!(matches!(err, LedgerError::Parse(_)));
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.xls");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "Opis,Data,Kwota").unwrap();

        let err = load_entries(&path).unwrap_err();
        assert!(matches!(err, LedgerError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "Opis,Data,Kwota").unwrap();
        writeln!(file, "deposit,2021-06-30,250.10").unwrap();

        let entries = load_entries(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description.as_deref(), Some("deposit"));
    }
}
