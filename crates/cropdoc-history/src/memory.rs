//! In-memory implementation of `HistoryStore`.
//!
//! `InMemoryHistoryStore` keeps every owner's entries in a `Vec` inside a
//! `HashMap`, protected by a `Mutex`, so request handlers on any thread can
//! append and read concurrently. Nothing survives a restart.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use tracing::debug;

use cropdoc_contracts::{
    error::{CropdocError, CropdocResult},
    identity::HistoryEntry,
};
use cropdoc_core::traits::HistoryStore;

/// An in-memory, append-only history store.
#[derive(Default)]
pub struct InMemoryHistoryStore {
    pub(crate) owners: Mutex<HashMap<String, Vec<HistoryEntry>>>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> CropdocResult<MutexGuard<'_, HashMap<String, Vec<HistoryEntry>>>> {
        self.owners
            .lock()
            .map_err(|e| CropdocError::HistoryUnavailable {
                reason: format!("history lock poisoned: {}", e),
            })
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn append(&self, owner: &str, entry: HistoryEntry) -> CropdocResult<()> {
        let mut owners = self.lock()?;
        let entries = owners.entry(owner.to_string()).or_default();
        entries.push(entry);

        debug!(owner = %owner, entries = entries.len(), "history entry appended");
        Ok(())
    }

    fn entries(&self, owner: &str) -> CropdocResult<Vec<HistoryEntry>> {
        let owners = self.lock()?;
        Ok(owners.get(owner).cloned().unwrap_or_default())
    }

    fn owner_count(&self) -> CropdocResult<usize> {
        Ok(self.lock()?.len())
    }
}
