//! Monthly aggregation of daily earnings.

use crate::config::RateConfig;
use crate::models::{MonthlySummary, TimesheetDocument};

use super::{calculate_daily_earnings, month_days};

/// Folds the daily earnings calculation over every date of a month.
///
/// Counts the days on which each flag is set, sums the daily gross,
/// extra hours, and extra value, and derives the income tax deduction
/// (`total_gross x income_tax`) and net amount. Entries outside the
/// requested month are ignored. `month0` is 0-based, normalized the same
/// way as [`month_days`].
///
/// Purely a fold with no side effects; callers recompute whenever the
/// document, the active month, or the configuration changes.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use timecard_engine::calculation::summarize_month;
/// use timecard_engine::config::RateConfig;
/// use timecard_engine::models::{DayEntry, TimesheetDocument};
///
/// let config = RateConfig::default();
/// let mut doc = TimesheetDocument::new();
/// // 2026-01-12 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// doc.set_entry(monday, DayEntry { worked: true, ..DayEntry::default() });
///
/// let summary = summarize_month(2026, 0, &doc, &config);
/// assert_eq!(summary.worked_days, 1);
/// assert_eq!(summary.total_gross, Decimal::from_str("78.00").unwrap());
/// ```
pub fn summarize_month(
    year: i32,
    month0: i32,
    document: &TimesheetDocument,
    config: &RateConfig,
) -> MonthlySummary {
    let mut summary = MonthlySummary::empty();

    for date in month_days(year, month0) {
        let entry = document.entry(date);
        let earnings = calculate_daily_earnings(date, entry, config);

        if let Some(entry) = entry {
            if entry.worked {
                summary.worked_days += 1;
            }
            if entry.overtime {
                summary.overtime_days += 1;
            }
            if entry.weekend_work {
                summary.weekend_days += 1;
            }
        }

        summary.total_gross += earnings.gross;
        summary.total_extra_hours += earnings.extra_hours;
        summary.total_extra_value += earnings.extra_value;
    }

    summary.total_discount = summary.total_gross * config.income_tax;
    summary.net_earnings = summary.total_gross - summary.total_discount;
    summary
}
