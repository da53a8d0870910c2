//! Aggregated monthly totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated counts and monetary sums for one calendar month.
///
/// Produced by [`summarize_month`](crate::calculation::summarize_month) by
/// folding the daily earnings calculation over every date of the month.
/// All monetary fields are exact decimals with no rounding applied;
/// rounding to two places is a display concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Number of days in the month with the standard-shift flag set.
    pub worked_days: u32,
    /// Number of days in the month with the overtime flag set.
    pub overtime_days: u32,
    /// Number of days in the month with the weekend-shift flag set.
    pub weekend_days: u32,
    /// Sum of daily gross earnings over the month.
    pub total_gross: Decimal,
    /// Sum of daily extra hours (overtime/weekend) over the month.
    pub total_extra_hours: Decimal,
    /// Sum of the daily premium portions of gross over the month.
    pub total_extra_value: Decimal,
    /// Income tax deduction: `total_gross` times the configured tax fraction.
    pub total_discount: Decimal,
    /// Net amount: `total_gross` minus `total_discount`.
    pub net_earnings: Decimal,
}

impl MonthlySummary {
    /// The all-zero summary of a month with no recorded work.
    pub fn empty() -> Self {
        Self {
            worked_days: 0,
            overtime_days: 0,
            weekend_days: 0,
            total_gross: Decimal::ZERO,
            total_extra_hours: Decimal::ZERO,
            total_extra_value: Decimal::ZERO,
            total_discount: Decimal::ZERO,
            net_earnings: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary_is_all_zero() {
        let summary = MonthlySummary::empty();
        assert_eq!(summary.worked_days, 0);
        assert_eq!(summary.total_gross, Decimal::ZERO);
        assert_eq!(summary.net_earnings, Decimal::ZERO);
    }

    #[test]
    fn test_monetary_fields_serialize_as_strings() {
        let summary = MonthlySummary::empty();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["worked_days"], 0);
        assert_eq!(json["total_gross"], "0");
    }
}
