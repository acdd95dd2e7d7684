//! # cropdoc-history
//!
//! Append-only, per-identity record of symptom queries.
//!
//! ## Overview
//!
//! The service records each accepted symptom query for registered callers.
//! This crate provides [`InMemoryHistoryStore`], the reference
//! [`HistoryStore`](cropdoc_core::traits::HistoryStore) implementation, and
//! [`record_query`], which applies the guest rule before touching the store.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cropdoc_history::{record_query, InMemoryHistoryStore};
//!
//! let store = InMemoryHistoryStore::new();
//! record_query(&store, &identity, "yellow leaves")?;
//! ```

pub mod memory;

pub use memory::InMemoryHistoryStore;

use cropdoc_contracts::{
    error::CropdocResult,
    identity::{HistoryEntry, Identity},
};
use cropdoc_core::traits::HistoryStore;

/// Record `symptoms` for `identity` if it owns a history.
///
/// Returns the appended entry, or `None` for guests.
pub fn record_query(
    store: &dyn HistoryStore,
    identity: &Identity,
    symptoms: &str,
) -> CropdocResult<Option<HistoryEntry>> {
    let Some(owner) = identity.owner() else {
        return Ok(None);
    };

    let entry = HistoryEntry::new(symptoms);
    store.append(owner, entry.clone())?;
    Ok(Some(entry))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use cropdoc_contracts::{
        error::CropdocError,
        identity::{HistoryEntry, Identity},
    };
    use cropdoc_core::traits::HistoryStore;

    use super::{record_query, InMemoryHistoryStore};

    fn farmer(email: &str) -> Identity {
        Identity::Registered {
            email: email.to_string(),
        }
    }

    /// Entries come back in append order.
    #[test]
    fn test_entries_in_append_order() {
        let store = InMemoryHistoryStore::new();
        store.append("a@farm.test", HistoryEntry::new("first")).unwrap();
        store.append("a@farm.test", HistoryEntry::new("second")).unwrap();
        store.append("a@farm.test", HistoryEntry::new("third")).unwrap();

        let symptoms: Vec<String> = store
            .entries("a@farm.test")
            .unwrap()
            .into_iter()
            .map(|e| e.symptoms)
            .collect();
        assert_eq!(symptoms, vec!["first", "second", "third"]);
    }

    /// One owner never sees another owner's entries.
    #[test]
    fn test_owners_are_isolated() {
        let store = InMemoryHistoryStore::new();
        store.append("a@farm.test", HistoryEntry::new("wilting")).unwrap();
        store.append("b@farm.test", HistoryEntry::new("rust")).unwrap();

        assert_eq!(store.entries("a@farm.test").unwrap().len(), 1);
        assert_eq!(store.entries("b@farm.test").unwrap()[0].symptoms, "rust");
        assert_eq!(store.owner_count().unwrap(), 2);
    }

    #[test]
    fn test_unknown_owner_has_empty_history() {
        let store = InMemoryHistoryStore::new();
        assert!(store.entries("nobody@farm.test").unwrap().is_empty());
        assert_eq!(store.owner_count().unwrap(), 0);
    }

    /// Guests are skipped before the store is touched.
    #[test]
    fn test_guest_queries_not_recorded() {
        let store = InMemoryHistoryStore::new();
        let recorded = record_query(&store, &Identity::Guest, "black spots").unwrap();

        assert!(recorded.is_none());
        assert_eq!(store.owner_count().unwrap(), 0);
    }

    #[test]
    fn test_registered_queries_recorded() {
        let store = InMemoryHistoryStore::new();
        let identity = farmer("grower@farm.test");

        let entry = record_query(&store, &identity, "white powder")
            .unwrap()
            .expect("registered identity must be recorded");

        let stored = store.entries("grower@farm.test").unwrap();
        assert_eq!(stored, vec![entry]);
    }

    /// A poisoned lock surfaces as HistoryUnavailable rather than a panic.
    #[test]
    fn test_poisoned_lock_reports_unavailable() {
        let store = std::sync::Arc::new(InMemoryHistoryStore::new());
        let poisoner = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.owners.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        match store.entries("a@farm.test") {
            Err(CropdocError::HistoryUnavailable { reason }) => {
                assert!(reason.contains("poisoned"));
            }
            other => panic!("expected HistoryUnavailable, got {:?}", other),
        }
    }
}
