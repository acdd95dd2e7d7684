//! Disease reference records.
//!
//! A `DiseaseRecord` is immutable reference data. Records are loaded once at
//! startup by the catalog crate and never change while the process runs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How damaging a disease is to the affected crop.
///
/// Serialized with the human-readable labels used throughout the catalog,
/// e.g. `"Moderate to High"`. Any other label is rejected at load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "Very High")]
    VeryHigh,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Moderate to High")]
    ModerateToHigh,
    #[serde(rename = "Moderate")]
    Moderate,
}

impl Severity {
    /// All levels, most severe first.
    pub const ALL: [Severity; 4] = [
        Severity::VeryHigh,
        Severity::High,
        Severity::ModerateToHigh,
        Severity::Moderate,
    ];

    /// The catalog label for this level.
    pub fn label(self) -> &'static str {
        match self {
            Severity::VeryHigh => "Very High",
            Severity::High => "High",
            Severity::ModerateToHigh => "Moderate to High",
            Severity::Moderate => "Moderate",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A single plant disease in the reference catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    /// Stable key, e.g. `"early_blight"`. Unique within a catalog.
    pub id: String,
    /// Common name, e.g. `"Early Blight"`.
    pub name: String,
    /// Pathogen name, e.g. `"Alternaria solani"`.
    pub scientific_name: String,
    /// Comma-separated list of affected crops, e.g. `"Tomato, Potato"`.
    pub plant: String,
    pub severity: Severity,
    pub causes: String,
    /// Observable symptom phrases. Order is preserved in match output.
    pub symptoms: Vec<String>,
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
}
