//! Toggle transition rules for day entries.

use chrono::NaiveDate;

use crate::models::{DayEntry, ToggleField};

use super::day_type_of;

/// Applies a field toggle to a day entry, returning the next consistent
/// entry.
///
/// The rules form a small, auditable transition table over the three
/// booleans rather than a sequence of conditional patches:
///
/// - On weekend dates, toggling `worked` or `overtime` is a no-op; the
///   entry is returned unchanged.
/// - Toggling `overtime` on forces `worked` on: overtime cannot exist
///   without a base shift.
/// - Toggling `worked` off forces `overtime` off: removing the base shift
///   removes any overtime built on it.
/// - `weekend_work` always flips on its own.
///
/// Every transition is total; illegal combinations are prevented by
/// construction, never by rejecting a toggle with an error. Notes pass
/// through untouched (note edits bypass this function entirely).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timecard_engine::calculation::apply_toggle;
/// use timecard_engine::models::{DayEntry, ToggleField};
///
/// // 2026-01-12 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
///
/// let entry = apply_toggle(monday, &DayEntry::default(), ToggleField::Overtime);
/// assert!(entry.overtime);
/// assert!(entry.worked); // forced on with the overtime
///
/// let entry = apply_toggle(monday, &entry, ToggleField::Worked);
/// assert!(!entry.worked);
/// assert!(!entry.overtime); // cleared with the base shift
/// ```
pub fn apply_toggle(date: NaiveDate, entry: &DayEntry, field: ToggleField) -> DayEntry {
    let weekend = day_type_of(date).is_weekend();
    if weekend && matches!(field, ToggleField::Worked | ToggleField::Overtime) {
        return entry.clone();
    }

    // Transition table over (field, worked, overtime). weekend_work is
    // independent of the other two flags.
    let (worked, overtime, weekend_work) = match (field, entry.worked, entry.overtime) {
        (ToggleField::Worked, false, overtime) => (true, overtime, entry.weekend_work),
        (ToggleField::Worked, true, _) => (false, false, entry.weekend_work),
        (ToggleField::Overtime, _, false) => (true, true, entry.weekend_work),
        (ToggleField::Overtime, worked, true) => (worked, false, entry.weekend_work),
        (ToggleField::WeekendWork, worked, overtime) => {
            (worked, overtime, !entry.weekend_work)
        }
    };

    DayEntry {
        worked,
        overtime,
        weekend_work,
        notes: entry.notes.clone(),
    }
}
