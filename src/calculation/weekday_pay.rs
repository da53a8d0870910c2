//! Weekday pay calculation.

use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::models::DayEntry;

use super::DailyEarnings;

/// Calculates pay for a weekday entry.
///
/// A worked weekday pays the flat base daily wage. The overtime block, if
/// flagged, adds `hours x hourly_rate x multiplier x (1 + night_surcharge)`:
/// a fixed short block paid at the overtime multiplier with the night
/// surcharge on the whole block.
///
/// The extra value is computed by the direct formula rather than by
/// subtracting the base wage from gross, so it stays consistent when the
/// base wage is reconfigured independently.
///
/// A weekday with `worked == false` pays nothing regardless of the other
/// flags.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use timecard_engine::calculation::calculate_weekday_pay;
/// use timecard_engine::config::RateConfig;
/// use timecard_engine::models::DayEntry;
///
/// let config = RateConfig::default();
/// let entry = DayEntry { worked: true, ..DayEntry::default() };
///
/// let pay = calculate_weekday_pay(&entry, &config);
/// assert_eq!(pay.gross, Decimal::from_str("78.00").unwrap());
/// assert_eq!(pay.extra_value, Decimal::ZERO);
/// ```
pub fn calculate_weekday_pay(entry: &DayEntry, config: &RateConfig) -> DailyEarnings {
    if !entry.worked {
        return DailyEarnings::zero();
    }

    if !entry.overtime {
        return DailyEarnings {
            gross: config.base_daily_wage,
            extra_hours: Decimal::ZERO,
            extra_value: Decimal::ZERO,
        };
    }

    let overtime = &config.weekday_overtime;
    let extra_value = overtime.hours
        * config.hourly_rate
        * overtime.multiplier
        * (Decimal::ONE + config.night_surcharge);

    DailyEarnings {
        gross: config.base_daily_wage + extra_value,
        extra_hours: overtime.hours,
        extra_value,
    }
}
