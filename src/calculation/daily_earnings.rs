//! The per-day earnings calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RateConfig;
use crate::models::DayEntry;

use super::{
    DayType, calculate_saturday_pay, calculate_sunday_pay, calculate_weekday_pay, day_type_of,
};

/// The monetary result of one day's work record.
///
/// All amounts are exact decimals; rounding to two places happens only at
/// display time, never here, so a month of sums carries no compounded
/// rounding error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEarnings {
    /// Total monetary amount for the day before tax.
    pub gross: Decimal,
    /// Decimal hours attributable to overtime or weekend work.
    pub extra_hours: Decimal,
    /// The portion of `gross` attributable to overtime/weekend premiums,
    /// as opposed to the flat base wage.
    pub extra_value: Decimal,
}

impl DailyEarnings {
    /// The all-zero result for a day with no payable work.
    pub fn zero() -> Self {
        Self {
            gross: Decimal::ZERO,
            extra_hours: Decimal::ZERO,
            extra_value: Decimal::ZERO,
        }
    }
}

/// Calculates the earnings for one calendar day.
///
/// An absent entry is treated as all-false and yields zero for every
/// field. The function dispatches on the day classification: weekdays pay
/// the base wage plus the optional overtime block, Saturday pays the
/// tiered weekend schedule, and Sunday pays the flat weekend multiplier;
/// both weekend formulas add the night differential. Total function, no
/// error cases.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use timecard_engine::calculation::calculate_daily_earnings;
/// use timecard_engine::config::RateConfig;
/// use timecard_engine::models::DayEntry;
///
/// let config = RateConfig::default();
/// // 2026-01-12 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let entry = DayEntry { worked: true, overtime: true, ..DayEntry::default() };
///
/// let earnings = calculate_daily_earnings(monday, Some(&entry), &config);
/// // 78.00 + (2.2 * 8.10 * 1.5 * 1.20) = 110.076
/// assert_eq!(earnings.gross, Decimal::from_str("110.076").unwrap());
/// assert_eq!(earnings.extra_hours, Decimal::from_str("2.2").unwrap());
/// ```
pub fn calculate_daily_earnings(
    date: NaiveDate,
    entry: Option<&DayEntry>,
    config: &RateConfig,
) -> DailyEarnings {
    let Some(entry) = entry else {
        return DailyEarnings::zero();
    };

    match day_type_of(date) {
        DayType::Weekday => calculate_weekday_pay(entry, config),
        DayType::Saturday => calculate_saturday_pay(entry, config),
        DayType::Sunday => calculate_sunday_pay(entry, config),
    }
}
