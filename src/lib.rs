//! Pay calculation engine for a single-user shift timecard.
//!
//! This crate turns a sparse per-day set of work flags (standard shift,
//! weekday overtime block, weekend shift) into per-day and per-month
//! monetary figures, applying tiered Saturday rates, night surcharges,
//! and an income tax deduction.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
