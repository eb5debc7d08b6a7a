//! Time-varying annual interest rates
//!
//! A schedule is an ordered list of effective-from dates; the rate in force
//! on a given day is the last entry dated on or before it.

pub mod loader;

pub use loader::load_schedule;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Day-count divisor for converting an annual rate to a daily rate
pub const DAYS_PER_YEAR: f64 = 365.0;

/// An annual rate taking effect on a date
///
/// The rate is a fraction, e.g. 0.05 for 5% per annum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub date: NaiveDate,
    pub annual_rate: f64,
}

/// Sorted schedule of annual rates
#[derive(Debug, Clone, Default)]
pub struct RateSchedule {
    /// Entries sorted ascending by date; ties keep input order
    entries: Vec<RateEntry>,
}

impl RateSchedule {
    /// Build a schedule, sorting entries ascending by effective date
    ///
    /// The sort is stable, so of two entries sharing a date the later one
    /// in input order is the one a lookup selects.
    pub fn from_entries(mut entries: Vec<RateEntry>) -> Self {
        entries.sort_by_key(|e| e.date);
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Annual rate in force on `date`, or `fallback_annual` when every
    /// entry is dated after it
    pub fn annual_rate_on(&self, date: NaiveDate, fallback_annual: f64) -> f64 {
        let mut selected = fallback_annual;
        for entry in &self.entries {
            if entry.date > date {
                break;
            }
            selected = entry.annual_rate;
        }
        selected
    }

    /// Daily rate in force on `date`
    pub fn daily_rate_on(&self, date: NaiveDate, fallback_annual: f64) -> f64 {
        self.annual_rate_on(date, fallback_annual) / DAYS_PER_YEAR
    }
}

/// Daily rate for an optional schedule
///
/// With no schedule the flat fallback rate applies.
pub fn daily_rate_on(
    schedule: Option<&RateSchedule>,
    date: NaiveDate,
    fallback_annual: f64,
) -> f64 {
    match schedule {
        Some(s) => s.daily_rate_on(date, fallback_annual),
        None => fallback_annual / DAYS_PER_YEAR,
    }
}
