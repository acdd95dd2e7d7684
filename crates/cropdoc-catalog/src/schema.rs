//! On-disk catalog schema.
//!
//! A catalog file is a TOML document holding an ordered array of disease
//! tables. Declaration order is catalog order, which is the tie-break order
//! for symptom matching.
//!
//! Example:
//! ```toml
//! [[diseases]]
//! id = "rust"
//! name = "Rust Disease"
//! scientific_name = "Puccinia spp."
//! plant = "Wheat, Bean, Rose"
//! severity = "Moderate to High"
//! causes = "Fungal pathogen, favored by moisture and moderate temperatures"
//! symptoms = ["Orange, yellow, or reddish-brown pustules on leaves"]
//! treatment = ["Remove infected leaves"]
//! prevention = ["Plant rust-resistant varieties"]
//! ```

use serde::{Deserialize, Serialize};

use cropdoc_contracts::disease::DiseaseRecord;

/// The top-level structure deserialized from a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Ordered disease records.
    pub diseases: Vec<DiseaseRecord>,
}
