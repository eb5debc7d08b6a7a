//! Core accrual engine for monthly compound interest
//!
//! Expands one entry into a sequence of month-end balances between its
//! start date and an injected valuation date.

use super::output::{round2, AccrualRow};
use crate::entry::Entry;
use crate::rates::{self, RateSchedule};
use chrono::{Months, NaiveDate};

/// Configuration for an accrual run
#[derive(Debug, Clone)]
pub struct AccrualConfig {
    /// Flat annual rate as a fraction, used wherever no schedule entry
    /// is in force
    pub annual_rate: f64,

    /// Evaluation instant; injected so runs are repeatable
    pub valuation_date: NaiveDate,
}

/// Main accrual engine
///
/// Pure given its inputs: the same entries, rates, and valuation date
/// always produce the same rows.
pub struct AccrualEngine {
    schedule: Option<RateSchedule>,
    config: AccrualConfig,
}

impl AccrualEngine {
    /// Create a new engine with an optional rate schedule and config
    pub fn new(schedule: Option<RateSchedule>, config: AccrualConfig) -> Self {
        Self { schedule, config }
    }

    /// Expand one entry into its monthly accrual rows
    ///
    /// Each step advances one calendar month, applies simple interest over
    /// the step's day count at the rate in force on the step's start date,
    /// and compounds across steps. Only completed months strictly before
    /// the valuation date are emitted; the final partial month never is.
    /// An entry already within one month of the valuation date yields an
    /// empty sequence.
    pub fn accrue(&self, entry: &Entry) -> Vec<AccrualRow> {
        let mut rows = Vec::new();
        let mut current = entry.date;
        let mut amount = entry.amount;

        loop {
            // End-of-month overflow clamps to the last valid day of the
            // target month (Jan 31 -> Feb 28/29), and the clamped day
            // carries into later steps
            let Some(next) = current.checked_add_months(Months::new(1)) else {
                break;
            };
            if next >= self.config.valuation_date {
                break;
            }

            let days = next.signed_duration_since(current).num_days();
            let daily_rate =
                rates::daily_rate_on(self.schedule.as_ref(), current, self.config.annual_rate);

            amount += amount * daily_rate * days as f64;

            rows.push(AccrualRow {
                description: entry.description.clone(),
                date: next,
                amount: round2(amount),
            });

            current = next;
        }

        rows
    }

    /// Accrue a batch of entries sequentially, in input order
    pub fn accrue_all(&self, entries: &[Entry]) -> Vec<AccrualRow> {
        entries.iter().flat_map(|e| self.accrue(e)).collect()
    }
}
