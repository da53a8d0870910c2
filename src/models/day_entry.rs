//! The per-day work record and its togglable fields.

use serde::{Deserialize, Serialize};

/// The work record for a single calendar day.
///
/// A day absent from the timesheet is equivalent to a `DayEntry` with all
/// flags `false` and empty notes, so `Default` gives the canonical
/// "nothing happened" record.
///
/// Two consistency rules hold for every entry produced through
/// [`apply_toggle`](crate::calculation::apply_toggle):
/// - `overtime` is only ever `true` when `worked` is `true`
/// - on weekend days `worked` and `overtime` stay `false`; only
///   `weekend_work` is settable
///
/// Field names serialize in camelCase (`weekendWork`) to match the stored
/// document schema, and every field carries a default so partially-stored
/// records (e.g. notes only) still deserialize.
///
/// # Example
///
/// ```
/// use timecard_engine::models::DayEntry;
///
/// let entry: DayEntry = serde_json::from_str(r#"{"notes": "swap with Ana"}"#).unwrap();
/// assert!(!entry.worked);
/// assert!(!entry.weekend_work);
/// assert_eq!(entry.notes, "swap with Ana");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayEntry {
    /// Standard weekday shift performed. Meaningful only on weekdays.
    pub worked: bool,
    /// Short weekday overtime block performed. Meaningful only on weekdays.
    pub overtime: bool,
    /// Weekend shift performed. Meaningful only on Saturday/Sunday.
    pub weekend_work: bool,
    /// Free-text annotation. Has no effect on any calculation.
    pub notes: String,
}

/// The boolean fields of a [`DayEntry`] that can be toggled.
///
/// Wire values match the document field names (`worked`, `overtime`,
/// `weekendWork`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToggleField {
    /// The standard weekday shift flag.
    Worked,
    /// The weekday overtime block flag.
    Overtime,
    /// The weekend shift flag.
    WeekendWork,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entry_is_all_false_with_empty_notes() {
        let entry = DayEntry::default();
        assert!(!entry.worked);
        assert!(!entry.overtime);
        assert!(!entry.weekend_work);
        assert_eq!(entry.notes, "");
    }

    #[test]
    fn test_serializes_with_camel_case_field_names() {
        let entry = DayEntry {
            worked: true,
            overtime: false,
            weekend_work: true,
            notes: "late start".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["worked"], true);
        assert_eq!(json["weekendWork"], true);
        assert_eq!(json["notes"], "late start");
    }

    #[test]
    fn test_deserializes_with_missing_fields_defaulted() {
        let entry: DayEntry = serde_json::from_str(r#"{"worked": true}"#).unwrap();
        assert!(entry.worked);
        assert!(!entry.overtime);
        assert!(!entry.weekend_work);
        assert_eq!(entry.notes, "");
    }

    #[test]
    fn test_toggle_field_wire_names() {
        assert_eq!(
            serde_json::to_string(&ToggleField::WeekendWork).unwrap(),
            "\"weekendWork\""
        );
        let field: ToggleField = serde_json::from_str("\"worked\"").unwrap();
        assert_eq!(field, ToggleField::Worked);
    }
}
