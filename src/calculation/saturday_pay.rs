//! Saturday pay calculation.

use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::models::DayEntry;

use super::DailyEarnings;

/// Calculates pay for a Saturday entry.
///
/// A worked Saturday is paid as three successive hour tiers at escalating
/// multipliers (`tier.hours x hourly_rate x tier.multiplier`, summed),
/// plus a night differential of
/// `weekend_night_hours x hourly_rate x weekend_multiplier x night_surcharge`.
///
/// The extra hours are the sum of the tier hours, and the whole gross is
/// extra value: weekend pay has no flat base component.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use timecard_engine::calculation::calculate_saturday_pay;
/// use timecard_engine::config::RateConfig;
/// use timecard_engine::models::DayEntry;
///
/// let config = RateConfig::default();
/// let entry = DayEntry { weekend_work: true, ..DayEntry::default() };
///
/// let pay = calculate_saturday_pay(&entry, &config);
/// // 2*8.10*1.5 + 2*8.10*1.6 + 3.5*8.10*2.0 + 1.5*8.10*2.0*0.20 = 111.78
/// assert_eq!(pay.gross, Decimal::from_str("111.78").unwrap());
/// assert_eq!(pay.extra_value, pay.gross);
/// ```
pub fn calculate_saturday_pay(entry: &DayEntry, config: &RateConfig) -> DailyEarnings {
    if !entry.weekend_work {
        return DailyEarnings::zero();
    }

    let tiers_total: Decimal = config
        .saturday_tiers
        .iter()
        .map(|tier| tier.hours * config.hourly_rate * tier.multiplier)
        .sum();

    let night_differential = config.weekend_night_hours
        * config.hourly_rate
        * config.weekend_multiplier
        * config.night_surcharge;

    let gross = tiers_total + night_differential;

    DailyEarnings {
        gross,
        extra_hours: config.saturday_hours(),
        extra_value: gross,
    }
}
