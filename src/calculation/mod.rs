//! Calculation logic for the timecard engine.
//!
//! This module contains all the calculation functions: calendar month
//! generation, day type detection, the per-day earnings calculation for
//! weekdays, Saturdays, and Sundays, the toggle transition rules that
//! keep a day entry consistent, and the monthly aggregation fold.
//!
//! Every function here is pure, synchronous, and total: absent or
//! unflagged entries produce zero, and no input can make a calculation
//! fail.

mod daily_earnings;
mod day_type;
mod entry_toggle;
mod month_days;
mod monthly;
mod saturday_pay;
mod sunday_pay;
mod weekday_pay;

pub use daily_earnings::{DailyEarnings, calculate_daily_earnings};
pub use day_type::{DayType, day_type_of};
pub use entry_toggle::apply_toggle;
pub use month_days::month_days;
pub use monthly::summarize_month;
pub use saturday_pay::calculate_saturday_pay;
pub use sunday_pay::calculate_sunday_pay;
pub use weekday_pay::calculate_weekday_pay;
