//! Accrual engine for monthly compound interest

mod engine;
mod output;

pub use engine::{AccrualConfig, AccrualEngine};
pub use output::{round2, AccrualRow};
