//! Configuration types for wage rates.
//!
//! This module contains the strongly-typed configuration structure that
//! is deserialized from a YAML rates file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The weekday overtime block: a fixed duration paid at a multiplier of
/// the hourly rate, with the night surcharge applied on top.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeekdayOvertime {
    /// Decimal hours in the overtime block.
    pub hours: Decimal,
    /// Multiplier of the hourly rate for overtime hours.
    pub multiplier: Decimal,
}

/// One tier of the Saturday shift schedule.
///
/// Saturday pay is a sequence of hour ranges at escalating multipliers,
/// modeling a rule where the early overtime hours are cheaper than the
/// later ones, capped by a fixed shift length.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SaturdayTier {
    /// Decimal hours in this tier.
    pub hours: Decimal,
    /// Multiplier of the hourly rate for this tier.
    pub multiplier: Decimal,
}

/// The complete set of named wage parameters.
///
/// An immutable value with no logic of its own, passed by reference into
/// every calculation call. `Default` carries the observed deployment
/// values so tests and examples need no configuration file.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use timecard_engine::config::RateConfig;
///
/// let config = RateConfig::default();
/// assert_eq!(config.base_daily_wage, Decimal::new(7800, 2)); // 78.00
/// assert_eq!(config.saturday_tiers.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateConfig {
    /// Flat wage for a standard weekday shift.
    pub base_daily_wage: Decimal,
    /// Base hourly rate all premiums are computed from.
    pub hourly_rate: Decimal,
    /// Night surcharge fraction (e.g. 0.20 for a 20% premium).
    pub night_surcharge: Decimal,
    /// Income tax fraction deducted from monthly gross.
    pub income_tax: Decimal,
    /// The weekday overtime block.
    pub weekday_overtime: WeekdayOvertime,
    /// The three successive Saturday hour tiers.
    pub saturday_tiers: [SaturdayTier; 3],
    /// Paid hours of a Sunday shift.
    pub sunday_hours: Decimal,
    /// Multiplier of the hourly rate for weekend hours.
    pub weekend_multiplier: Decimal,
    /// The fixed sub-duration of a weekend shift counted as night hours.
    ///
    /// The night differential applies to this duration rather than to
    /// actual clock times; that simplification is part of the pay rules,
    /// not an implementation shortcut.
    pub weekend_night_hours: Decimal,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            base_daily_wage: Decimal::new(7800, 2), // 78.00
            hourly_rate: Decimal::new(810, 2),      // 8.10
            night_surcharge: Decimal::new(20, 2),   // 0.20
            income_tax: Decimal::new(11, 2),        // 0.11
            weekday_overtime: WeekdayOvertime {
                hours: Decimal::new(22, 1),     // 2.2
                multiplier: Decimal::new(15, 1), // 1.5
            },
            saturday_tiers: [
                SaturdayTier {
                    hours: Decimal::TWO,
                    multiplier: Decimal::new(15, 1), // 1.5
                },
                SaturdayTier {
                    hours: Decimal::TWO,
                    multiplier: Decimal::new(16, 1), // 1.6
                },
                SaturdayTier {
                    hours: Decimal::new(35, 1),     // 3.5
                    multiplier: Decimal::TWO,
                },
            ],
            sunday_hours: Decimal::new(75, 1), // 7.5
            weekend_multiplier: Decimal::TWO,
            weekend_night_hours: Decimal::new(15, 1), // 1.5
        }
    }
}

impl RateConfig {
    /// Sum of the Saturday tier hours, i.e. the full Saturday shift length.
    pub fn saturday_hours(&self) -> Decimal {
        self.saturday_tiers.iter().map(|tier| tier.hours).sum()
    }
}
