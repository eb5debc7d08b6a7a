//! Interest Ledger - monthly compound interest accrual over dated entries
//!
//! This library provides:
//! - Tabular ingestion of dated monetary entries
//! - Time-varying annual rate schedules with effective-date lookup
//! - A pure month-stepping compound accrual engine
//! - Ledger output with overwrite protection

pub mod accrual;
pub mod config;
pub mod entry;
pub mod error;
pub mod rates;
pub mod terminal;
pub mod writer;

// Re-export commonly used types
pub use accrual::{AccrualConfig, AccrualEngine, AccrualRow};
pub use config::Config;
pub use entry::Entry;
pub use error::{LedgerError, Result};
pub use rates::{RateEntry, RateSchedule};
