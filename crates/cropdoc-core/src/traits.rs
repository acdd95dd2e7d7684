//! Store traits injected into the service.
//!
//! The catalog is immutable and passed around as a plain slice. Query history
//! is the only mutable state, so it sits behind a trait that request handlers
//! receive through application state rather than reaching for a global.

use cropdoc_contracts::{error::CropdocResult, identity::HistoryEntry};

/// Append-only, per-owner record of symptom queries.
///
/// Implementations must be safe to share across request handlers. An owner
/// is a registered identity's key (its normalized email). Guests never own
/// history; callers are expected to skip them before reaching the store.
pub trait HistoryStore: Send + Sync {
    /// Append `entry` to `owner`'s history.
    ///
    /// Entries are never modified or removed once appended.
    fn append(&self, owner: &str, entry: HistoryEntry) -> CropdocResult<()>;

    /// All entries for `owner`, oldest first. Unknown owners have none.
    fn entries(&self, owner: &str) -> CropdocResult<Vec<HistoryEntry>>;

    /// Number of owners with at least one entry.
    fn owner_count(&self) -> CropdocResult<usize>;
}
