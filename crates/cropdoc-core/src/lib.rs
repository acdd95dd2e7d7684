//! # cropdoc-core
//!
//! Deterministic matching and lookup over the plant disease catalog.
//!
//! This crate provides:
//! - [`matcher::match_symptoms`], which ranks diseases against a free-text
//!   symptom description
//! - catalog lookups in [`search`]
//! - the [`traits::HistoryStore`] seam for recording queries
//!
//! Everything here is synchronous and free of I/O.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cropdoc_core::match_symptoms;
//!
//! let results = match_symptoms("dark brown spots on leaves", catalog.records())?;
//! ```

pub mod matcher;
pub mod search;
pub mod traits;

pub use matcher::{match_symptoms, normalize_query};
pub use traits::HistoryStore;
