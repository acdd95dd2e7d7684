//! # cropdoc-catalog
//!
//! A TOML-driven, validated plant disease catalog.
//!
//! ## Overview
//!
//! This crate provides [`Catalog`], the immutable reference data the symptom
//! matcher runs against. Records are declared in a TOML file as an array of
//! `[[diseases]]` tables, validated once at load, and kept in declaration
//! order.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use cropdoc_catalog::Catalog;
//!
//! let catalog = Catalog::builtin()?;
//! let blight = catalog.get("early_blight")?;
//! ```
//!
//! ## Validation
//!
//! Loading fails with `CatalogError` on malformed TOML, unknown severity
//! labels, an empty catalog, blank or duplicate ids, and records without
//! symptoms.

pub mod catalog;
pub mod schema;
pub mod stats;

pub use catalog::Catalog;
pub use schema::CatalogFile;
pub use stats::{CatalogStatistics, SeverityDistribution};

// ── Tests ─────────────────────────────────────────────────────────────────────
