//! Application state for the timecard engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::RateConfig;
use crate::error::EngineResult;
use crate::models::TimesheetDocument;
use crate::store::TimesheetStore;

/// Shared application state.
///
/// Holds the injected rate configuration, the persistence gateway, and
/// the per-user in-memory documents. The in-memory document is the
/// working replica every calculation reads; it is loaded from the store
/// on first touch and stays authoritative regardless of save outcomes.
#[derive(Clone)]
pub struct AppState {
    config: Arc<RateConfig>,
    store: Arc<dyn TimesheetStore>,
    documents: Arc<Mutex<HashMap<String, TimesheetDocument>>>,
}

impl AppState {
    /// Creates a new application state with the given configuration and
    /// store.
    pub fn new(config: RateConfig, store: impl TimesheetStore + 'static) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            documents: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns the rate configuration.
    pub fn config(&self) -> &RateConfig {
        &self.config
    }

    /// Returns a handle to the persistence gateway.
    pub fn store(&self) -> Arc<dyn TimesheetStore> {
        Arc::clone(&self.store)
    }

    /// Runs a closure against the in-memory document for a user, loading
    /// it from the store first if this is the user's first touch.
    ///
    /// Only a store load can fail; the closure itself is infallible.
    pub fn with_document<R>(
        &self,
        user_id: &str,
        f: impl FnOnce(&mut TimesheetDocument) -> R,
    ) -> EngineResult<R> {
        let mut documents = self.documents.lock().expect("documents mutex poisoned");
        if !documents.contains_key(user_id) {
            let loaded = self.store.load(user_id)?;
            documents.insert(user_id.to_string(), loaded);
        }
        let document = documents
            .get_mut(user_id)
            .expect("document inserted above");
        Ok(f(document))
    }
}
