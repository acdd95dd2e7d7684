//! TOML-driven disease catalog.
//!
//! `Catalog` loads a `CatalogFile` from a TOML string or file and validates it
//! once, at load. A catalog that loads successfully is safe to match against:
//!
//! 1. It holds at least one record.
//! 2. Every record has a non-blank `id`, and ids are unique.
//! 3. Every record has at least one symptom phrase, so match percentages
//!    never divide by zero.
//!
//! After load the catalog is immutable and can be shared freely.

use std::{collections::HashSet, path::Path};

use tracing::{debug, info, warn};

use cropdoc_contracts::{
    disease::DiseaseRecord,
    error::{CropdocError, CropdocResult},
};
use cropdoc_core::search;

use crate::{schema::CatalogFile, stats::CatalogStatistics};

/// The catalog shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../catalog/diseases.toml");

/// An ordered, validated, read-only set of disease records.
///
/// ```rust,ignore
/// use cropdoc_catalog::Catalog;
///
/// let catalog = Catalog::from_file(Path::new("catalog/diseases.toml"))?;
/// let results = cropdoc_core::match_symptoms("white powder on leaves", catalog.records())?;
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<DiseaseRecord>,
}

impl Catalog {
    /// Load the built-in 15-disease catalog.
    pub fn builtin() -> CropdocResult<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse `s` as TOML and build a validated `Catalog`.
    ///
    /// Returns `CropdocError::CatalogError` if the TOML is malformed, does not
    /// match `CatalogFile`, or fails validation.
    pub fn from_toml_str(s: &str) -> CropdocResult<Self> {
        let file: CatalogFile = toml::from_str(s).map_err(|e| CropdocError::CatalogError {
            reason: format!("failed to parse catalog TOML: {}", e),
        })?;
        Self::from_records(file.diseases)
    }

    /// Read the file at `path` and parse it as a catalog.
    pub fn from_file(path: &Path) -> CropdocResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CropdocError::CatalogError {
            reason: format!("failed to read catalog file '{}': {}", path.display(), e),
        })?;
        let catalog = Self::from_toml_str(&contents)?;
        info!(
            path = %path.display(),
            diseases = catalog.len(),
            "catalog loaded from file"
        );
        Ok(catalog)
    }

    /// Validate `records` and wrap them, keeping their order.
    pub fn from_records(records: Vec<DiseaseRecord>) -> CropdocResult<Self> {
        if records.is_empty() {
            return Err(reject("catalog contains no diseases".to_string()));
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id.trim().is_empty() {
                return Err(reject(format!(
                    "disease '{}' has a blank id",
                    record.name
                )));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(reject(format!("duplicate disease id '{}'", record.id)));
            }
            if record.symptoms.is_empty() {
                return Err(reject(format!(
                    "disease '{}' has no symptoms",
                    record.id
                )));
            }
            debug!(
                id = %record.id,
                symptoms = record.symptoms.len(),
                "catalog record accepted"
            );
        }

        Ok(Self { records })
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> CropdocResult<&DiseaseRecord> {
        search::find(id, &self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a loaded catalog; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Totals and severity distribution.
    pub fn statistics(&self) -> CatalogStatistics {
        CatalogStatistics::compute(&self.records)
    }
}

fn reject(reason: String) -> CropdocError {
    warn!(%reason, "catalog rejected");
    CropdocError::CatalogError { reason }
}
