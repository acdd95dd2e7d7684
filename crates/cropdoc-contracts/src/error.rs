//! Error types shared by every cropdoc crate.
//!
//! All fallible operations return `CropdocResult<T>`. Variants carry enough
//! context for an operator to act on the message alone.

use thiserror::Error;

/// The unified error type for cropdoc.
#[derive(Debug, Error)]
pub enum CropdocError {
    /// The caller supplied a missing or blank value.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A lookup by key found nothing.
    #[error("{kind} '{key}' not found")]
    NotFound { kind: String, key: String },

    /// The caller's identity may not perform this operation.
    #[error("forbidden: {reason}")]
    Forbidden { reason: String },

    /// The disease catalog is malformed. Raised only at load time.
    #[error("catalog error: {reason}")]
    CatalogError { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The history store could not read or append.
    #[error("history unavailable: {reason}")]
    HistoryUnavailable { reason: String },

    /// The HTTP server failed to bind or stopped abnormally.
    #[error("server error: {reason}")]
    ServerError { reason: String },
}

impl CropdocError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn not_found(kind: impl Into<String>, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            key: key.into(),
        }
    }
}

/// Convenience alias used throughout the cropdoc crates.
pub type CropdocResult<T> = Result<T, CropdocError>;
