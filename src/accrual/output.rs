//! Accrual output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single accrual event: the running balance after one completed month
///
/// Dates serialize in ISO 8601 `YYYY-MM-DD` form; amounts are rounded to
/// two decimal places when the row is emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualRow {
    pub description: Option<String>,
    pub date: NaiveDate,
    pub amount: f64,
}

/// Round to two decimal places, halves away from zero
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_nearest_cent() {
        assert_eq!(round2(10.004), 10.0);
        assert_eq!(round2(10.006), 10.01);
        assert_eq!(round2(1010.191780), 1010.19);
        assert_eq!(round2(-10.006), -10.01);
    }

    #[test]
    fn test_round2_exact_halves_away_from_zero() {
        // 0.125 is exactly representable, so the half is genuine
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }
}
