//! JSON file implementation of the timesheet store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};
use crate::models::TimesheetDocument;

use super::TimesheetStore;

/// A [`TimesheetStore`] backed by one JSON file per user.
///
/// Each user's document lives at `<root>/<user_id>.json` as the plain
/// day-keyed object the document serializes to. Saves read the existing
/// file, merge the partial at day-key granularity, and write the result
/// back, which gives the store the required merge semantics.
///
/// # Example
///
/// ```no_run
/// use timecard_engine::store::{JsonFileStore, TimesheetStore};
///
/// let store = JsonFileStore::new("./data");
/// let document = store.load("user_001")?;
/// # Ok::<(), timecard_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created on the first save, not here.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, user_id: &str) -> PathBuf {
        self.root.join(format!("{user_id}.json"))
    }
}

impl TimesheetStore for JsonFileStore {
    fn load(&self, user_id: &str) -> EngineResult<TimesheetDocument> {
        let path = self.path_for(user_id);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            // Absence and empty-document are equivalent.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(TimesheetDocument::new());
            }
            Err(e) => {
                return Err(EngineError::StoreReadError {
                    user_id: user_id.to_string(),
                    message: e.to_string(),
                });
            }
        };

        serde_json::from_str(&content).map_err(|e| EngineError::StoreCorrupt {
            user_id: user_id.to_string(),
            message: e.to_string(),
        })
    }

    fn save(&self, user_id: &str, partial: &TimesheetDocument) -> EngineResult<()> {
        let mut stored = self.load(user_id)?;
        stored.merge(partial);

        fs::create_dir_all(&self.root).map_err(|e| EngineError::StoreWriteError {
            user_id: user_id.to_string(),
            message: e.to_string(),
        })?;

        let content =
            serde_json::to_string_pretty(&stored).map_err(|e| EngineError::StoreWriteError {
                user_id: user_id.to_string(),
                message: e.to_string(),
            })?;

        fs::write(self.path_for(user_id), content).map_err(|e| EngineError::StoreWriteError {
            user_id: user_id.to_string(),
            message: e.to_string(),
        })
    }
}
