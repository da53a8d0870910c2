//! Sunday pay calculation.

use crate::config::RateConfig;
use crate::models::DayEntry;

use super::DailyEarnings;

/// Calculates pay for a Sunday entry.
///
/// A worked Sunday pays `sunday_hours x hourly_rate x weekend_multiplier`
/// plus the same night differential as Saturday:
/// `weekend_night_hours x hourly_rate x weekend_multiplier x night_surcharge`.
///
/// The extra hours are the Sunday shift hours, and the whole gross is
/// extra value: weekend pay has no flat base component.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use timecard_engine::calculation::calculate_sunday_pay;
/// use timecard_engine::config::RateConfig;
/// use timecard_engine::models::DayEntry;
///
/// let config = RateConfig::default();
/// let entry = DayEntry { weekend_work: true, ..DayEntry::default() };
///
/// let pay = calculate_sunday_pay(&entry, &config);
/// // 7.5*8.10*2.0 + 1.5*8.10*2.0*0.20 = 121.50 + 4.86 = 126.36
/// assert_eq!(pay.gross, Decimal::from_str("126.36").unwrap());
/// ```
pub fn calculate_sunday_pay(entry: &DayEntry, config: &RateConfig) -> DailyEarnings {
    if !entry.weekend_work {
        return DailyEarnings::zero();
    }

    let base = config.sunday_hours * config.hourly_rate * config.weekend_multiplier;
    let night_differential = config.weekend_night_hours
        * config.hourly_rate
        * config.weekend_multiplier
        * config.night_surcharge;

    let gross = base + night_differential;

    DailyEarnings {
        gross,
        extra_hours: config.sunday_hours,
        extra_value: gross,
    }
}
