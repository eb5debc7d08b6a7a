//! JSON run configuration
//!
//! An explicit value threaded into whatever needs it; never a process-wide
//! global. Missing input and output paths are resolved interactively by the
//! binary before the run starts.

use crate::error::Result;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// Run configuration, read from a JSON file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Annual interest rate as a percentage, e.g. 8 for 8% per annum
    #[serde(default)]
    pub annual_interest_rate: f64,

    /// Path of the entries file to convert
    #[serde(default)]
    pub input_file: Option<String>,

    /// Path the accrual ledger is written to
    #[serde(default)]
    pub output_file: Option<String>,

    /// Optional path of a rate schedule file; when absent or nonexistent
    /// the flat rate applies
    #[serde(default)]
    pub interest_rates_file: Option<String>,

    /// Replace an existing output file instead of writing beside it
    #[serde(default)]
    pub overwrite_existing_file: bool,
}

impl Config {
    /// Read configuration from a JSON file
    ///
    /// A nonexistent file yields the defaults, so a first run works before
    /// any configuration has been written.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Annual rate as a fraction, the form the accrual engine consumes
    pub fn annual_rate_fraction(&self) -> f64 {
        self.annual_interest_rate / 100.0
    }
}
