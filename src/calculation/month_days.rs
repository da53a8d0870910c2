//! Calendar month generation.

use chrono::{Datelike, NaiveDate};

/// Produces the ordered sequence of calendar dates in a month, from the
/// 1st to the last day, inclusive.
///
/// `month0` is 0-based (0 = January, 11 = December). Out-of-range months
/// normalize into adjacent years: month 12 of 2025 is January 2026 and
/// month -1 of 2025 is December 2024. Deterministic and restartable:
/// the same inputs always yield an identical sequence.
///
/// Dates outside the representable calendar range yield an empty
/// sequence.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timecard_engine::calculation::month_days;
///
/// let january = month_days(2026, 0);
/// assert_eq!(january.len(), 31);
/// assert_eq!(january[0], NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
/// assert_eq!(january[30], NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
///
/// // Month 12 normalizes to January of the following year.
/// assert_eq!(month_days(2025, 12), january);
/// ```
pub fn month_days(year: i32, month0: i32) -> Vec<NaiveDate> {
    // Fold the 0-based month into the year, JS-Date style.
    let total_months = i64::from(year) * 12 + i64::from(month0);
    let norm_year = total_months.div_euclid(12);
    let norm_month0 = total_months.rem_euclid(12) as u32;

    let Ok(norm_year) = i32::try_from(norm_year) else {
        return Vec::new();
    };
    let Some(first) = NaiveDate::from_ymd_opt(norm_year, norm_month0 + 1, 1) else {
        return Vec::new();
    };

    let mut days = Vec::with_capacity(31);
    let mut current = first;
    loop {
        days.push(current);
        match current.succ_opt() {
            Some(next) if next.month0() == norm_month0 => current = next,
            _ => break,
        }
    }
    days
}
