//! The sparse day-keyed timesheet document.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DayEntry;

/// A sparse mapping from ISO calendar-date keys (`YYYY-MM-DD`) to
/// [`DayEntry`] records.
///
/// This is the only externally visible schema of the engine: it is the
/// exact shape of the stored JSON document, so it serializes transparently
/// as a plain object. A key absent from the mapping is equivalent to a
/// default entry.
///
/// The in-memory document is the working replica the engine reads and
/// writes; the canonical long-term copy lives in a
/// [`TimesheetStore`](crate::store::TimesheetStore).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timecard_engine::models::{DayEntry, TimesheetDocument};
///
/// let mut doc = TimesheetDocument::new();
/// let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// doc.set_entry(date, DayEntry { worked: true, ..DayEntry::default() });
///
/// assert!(doc.entry(date).unwrap().worked);
/// assert_eq!(serde_json::to_value(&doc).unwrap()["2026-01-12"]["worked"], true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimesheetDocument {
    entries: BTreeMap<String, DayEntry>,
}

impl TimesheetDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats the document key for a calendar date.
    pub fn date_key(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Returns the entry for a date, if one has been recorded.
    pub fn entry(&self, date: NaiveDate) -> Option<&DayEntry> {
        self.entries.get(&Self::date_key(date))
    }

    /// Returns the entry for a date, or the default all-false record if
    /// the day is absent.
    pub fn entry_or_default(&self, date: NaiveDate) -> DayEntry {
        self.entry(date).cloned().unwrap_or_default()
    }

    /// Replaces the entry for a date in full.
    pub fn set_entry(&mut self, date: NaiveDate, entry: DayEntry) {
        self.entries.insert(Self::date_key(date), entry);
    }

    /// Sets the free-text notes for a date, creating a default entry if
    /// the day is absent.
    ///
    /// Note edits bypass the toggle transition rules entirely; no other
    /// field is touched.
    pub fn set_notes(&mut self, date: NaiveDate, notes: &str) -> &DayEntry {
        let key = Self::date_key(date);
        let entry = self.entries.entry(key).or_default();
        entry.notes = notes.to_string();
        entry
    }

    /// Merges a partial document into this one at day-key granularity.
    ///
    /// Keys present in `partial` overwrite the corresponding entry in
    /// full (not field-by-field); keys absent from `partial` are left
    /// untouched. This mirrors the persistence merge contract.
    pub fn merge(&mut self, partial: &TimesheetDocument) {
        for (key, entry) in &partial.entries {
            self.entries.insert(key.clone(), entry.clone());
        }
    }

    /// Returns a single-key partial document for a date, suitable for a
    /// merge save of just that day.
    ///
    /// If the date has no entry the partial is empty, which under the
    /// merge contract changes nothing in storage.
    pub fn partial_for(&self, date: NaiveDate) -> TimesheetDocument {
        let mut partial = TimesheetDocument::new();
        if let Some(entry) = self.entry(date) {
            partial.set_entry(date, entry.clone());
        }
        partial
    }

    /// Iterates over all recorded `(key, entry)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &DayEntry)> {
        self.entries.iter()
    }

    /// Returns the number of recorded days.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no day has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_key_is_iso_format() {
        assert_eq!(TimesheetDocument::date_key(date(2026, 1, 5)), "2026-01-05");
    }

    #[test]
    fn test_absent_day_yields_default_entry() {
        let doc = TimesheetDocument::new();
        assert!(doc.entry(date(2026, 1, 5)).is_none());
        assert_eq!(doc.entry_or_default(date(2026, 1, 5)), DayEntry::default());
    }

    #[test]
    fn test_set_notes_creates_entry_and_leaves_flags_alone() {
        let mut doc = TimesheetDocument::new();
        doc.set_entry(
            date(2026, 1, 12),
            DayEntry {
                worked: true,
                ..DayEntry::default()
            },
        );

        doc.set_notes(date(2026, 1, 12), "doctor at 16h");
        doc.set_notes(date(2026, 1, 13), "new day");

        let monday = doc.entry(date(2026, 1, 12)).unwrap();
        assert!(monday.worked);
        assert_eq!(monday.notes, "doctor at 16h");

        let tuesday = doc.entry(date(2026, 1, 13)).unwrap();
        assert!(!tuesday.worked);
        assert_eq!(tuesday.notes, "new day");
    }

    #[test]
    fn test_merge_overwrites_present_keys_in_full() {
        let mut stored = TimesheetDocument::new();
        stored.set_entry(
            date(2026, 1, 12),
            DayEntry {
                worked: true,
                overtime: true,
                notes: "old".to_string(),
                ..DayEntry::default()
            },
        );
        stored.set_entry(
            date(2026, 1, 13),
            DayEntry {
                worked: true,
                ..DayEntry::default()
            },
        );

        let mut partial = TimesheetDocument::new();
        partial.set_entry(date(2026, 1, 12), DayEntry::default());

        stored.merge(&partial);

        // The present key is replaced whole, notes included.
        assert_eq!(
            stored.entry(date(2026, 1, 12)).unwrap(),
            &DayEntry::default()
        );
        // The absent key is untouched.
        assert!(stored.entry(date(2026, 1, 13)).unwrap().worked);
    }

    #[test]
    fn test_partial_for_contains_only_the_requested_day() {
        let mut doc = TimesheetDocument::new();
        doc.set_entry(
            date(2026, 1, 12),
            DayEntry {
                worked: true,
                ..DayEntry::default()
            },
        );
        doc.set_entry(
            date(2026, 1, 13),
            DayEntry {
                worked: true,
                ..DayEntry::default()
            },
        );

        let partial = doc.partial_for(date(2026, 1, 12));
        assert_eq!(partial.len(), 1);
        assert!(partial.entry(date(2026, 1, 12)).unwrap().worked);

        let empty = doc.partial_for(date(2026, 1, 14));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_round_trips_through_json_as_plain_object() {
        let mut doc = TimesheetDocument::new();
        doc.set_entry(
            date(2026, 1, 17),
            DayEntry {
                weekend_work: true,
                ..DayEntry::default()
            },
        );

        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.contains("\"2026-01-17\""));

        let back: TimesheetDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
