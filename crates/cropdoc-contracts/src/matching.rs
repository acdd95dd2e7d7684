//! Symptom match results.
//!
//! A `MatchResult` is derived on every query and never stored. It borrows
//! from the catalog it was computed against, so producing one never clones
//! reference data.

use serde::Serialize;

use crate::disease::DiseaseRecord;

/// How well one disease explains a free-text symptom description.
///
/// Serialized field names are part of the HTTP wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult<'a> {
    /// The `id` of `disease`.
    pub disease_id: &'a str,
    /// The full catalog record.
    pub disease: &'a DiseaseRecord,
    /// Number of symptom phrases evidenced in the query. Always at least 1.
    pub match_count: usize,
    /// Length of `disease.symptoms`.
    pub total_symptoms: usize,
    /// `match_count / total_symptoms * 100`, rounded half-to-even.
    pub match_percentage: u32,
    /// The matched phrases, in catalog order.
    pub matched_symptoms: Vec<&'a str>,
}
