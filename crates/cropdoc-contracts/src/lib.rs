//! # cropdoc-contracts
//!
//! Shared types, records, and error contracts for the cropdoc disease service.
//!
//! Every crate in the workspace imports from here. No business logic lives in
//! this crate, only data definitions and error types.

pub mod disease;
pub mod error;
pub mod identity;
pub mod matching;
