//! Persistence gateway for timesheet documents.
//!
//! The calculation engine never performs I/O itself; it reads and writes
//! the in-memory [`TimesheetDocument`](crate::models::TimesheetDocument)
//! and hands partial documents to a [`TimesheetStore`] for durable
//! storage. The in-memory document remains the source of truth for all
//! calculations regardless of persistence outcome.

mod json_file;

pub use json_file::JsonFileStore;

use crate::error::EngineResult;
use crate::models::TimesheetDocument;

/// The storage contract the engine requires.
///
/// # Merge semantics
///
/// `save` merges the partial document into the stored one at day-key
/// granularity: keys present in the partial overwrite the corresponding
/// stored entry in full (not field-by-field); keys absent from the
/// partial are left untouched. Callers pass either the single changed
/// day-key or the full current document; both are valid merge inputs.
///
/// `load` returns the stored mapping, or an empty document if none
/// exists; absence and empty-document are equivalent and must never be
/// reported as an error.
///
/// Implementations receive an opaque `user_id`; the engine performs no
/// authentication of its own.
pub trait TimesheetStore: Send + Sync {
    /// Returns the stored document for a user, or an empty document if
    /// none exists.
    fn load(&self, user_id: &str) -> EngineResult<TimesheetDocument>;

    /// Merges a partial document into the stored document for a user.
    fn save(&self, user_id: &str, partial: &TimesheetDocument) -> EngineResult<()>;
}
