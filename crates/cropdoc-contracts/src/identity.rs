//! Caller identity and per-identity query history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who issued a request.
///
/// Identity is asserted by whatever fronts the service; this crate never
/// verifies it. Only registered identities own a history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Identity {
    Guest,
    Registered { email: String },
}

impl Identity {
    /// Build an identity from an optional asserted email.
    ///
    /// The email is trimmed and lower-cased. A missing or blank value yields
    /// `Identity::Guest`.
    pub fn from_email(email: Option<&str>) -> Self {
        match email.map(|e| e.trim().to_lowercase()) {
            Some(email) if !email.is_empty() => Identity::Registered { email },
            _ => Identity::Guest,
        }
    }

    /// The history owner key, or `None` for guests.
    pub fn owner(&self) -> Option<&str> {
        match self {
            Identity::Guest => None,
            Identity::Registered { email } => Some(email),
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Identity::Guest)
    }
}

/// One recorded symptom query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    /// The normalized (trimmed, lower-cased) query text.
    pub symptoms: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with a fresh id and the current UTC time.
    pub fn new(symptoms: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            symptoms: symptoms.into(),
            timestamp: Utc::now(),
        }
    }
}
