//! Catalog lookups: by id, by free text, by affected plant.
//!
//! All functions preserve catalog order and borrow from the catalog.

use cropdoc_contracts::{
    disease::DiseaseRecord,
    error::{CropdocError, CropdocResult},
};

/// Look up a record by its exact `id`.
pub fn find<'a>(id: &str, catalog: &'a [DiseaseRecord]) -> CropdocResult<&'a DiseaseRecord> {
    catalog
        .iter()
        .find(|disease| disease.id == id)
        .ok_or_else(|| CropdocError::not_found("disease", id))
}

/// Records whose name, plant list, or scientific name contains `raw_query`.
///
/// Comparison is case-insensitive substring containment.
///
/// # Errors
///
/// `CropdocError::InvalidInput` if the query is blank.
pub fn search<'a>(raw_query: &str, catalog: &'a [DiseaseRecord]) -> CropdocResult<Vec<&'a DiseaseRecord>> {
    let query = raw_query.trim().to_lowercase();
    if query.is_empty() {
        return Err(CropdocError::invalid_input("search query required"));
    }

    Ok(catalog
        .iter()
        .filter(|disease| {
            disease.name.to_lowercase().contains(&query)
                || disease.plant.to_lowercase().contains(&query)
                || disease.scientific_name.to_lowercase().contains(&query)
        })
        .collect())
}

/// Records whose plant list mentions `plant` (case-insensitive substring).
///
/// An empty `plant` matches every record.
pub fn by_plant<'a>(plant: &str, catalog: &'a [DiseaseRecord]) -> Vec<&'a DiseaseRecord> {
    let plant = plant.to_lowercase();
    catalog
        .iter()
        .filter(|disease| disease.plant.to_lowercase().contains(&plant))
        .collect()
}
