//! Core data models for the timecard engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day_entry;
mod monthly_summary;
mod timesheet;

pub use day_entry::{DayEntry, ToggleField};
pub use monthly_summary::MonthlySummary;
pub use timesheet::TimesheetDocument;
