//! Ledger entry data structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated monetary entry from the input file
///
/// The date is the day interest starts accruing; the amount is the opening
/// principal. Entries are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Free-text label carried through to every output row
    pub description: Option<String>,

    /// Accrual start date
    pub date: NaiveDate,

    /// Opening principal
    pub amount: f64,
}

impl Entry {
    pub fn new(description: Option<String>, date: NaiveDate, amount: f64) -> Self {
        Self {
            description,
            date,
            amount,
        }
    }
}
