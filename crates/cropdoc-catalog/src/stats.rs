//! Aggregate counts over a loaded catalog.

use serde::Serialize;

use cropdoc_contracts::disease::{DiseaseRecord, Severity};

/// Number of records at each severity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityDistribution {
    #[serde(rename = "Very High")]
    pub very_high: usize,
    #[serde(rename = "High")]
    pub high: usize,
    #[serde(rename = "Moderate to High")]
    pub moderate_to_high: usize,
    #[serde(rename = "Moderate")]
    pub moderate: usize,
}

impl SeverityDistribution {
    fn count(&mut self, severity: Severity) {
        match severity {
            Severity::VeryHigh => self.very_high += 1,
            Severity::High => self.high += 1,
            Severity::ModerateToHigh => self.moderate_to_high += 1,
            Severity::Moderate => self.moderate += 1,
        }
    }

    /// The count for one level.
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::VeryHigh => self.very_high,
            Severity::High => self.high,
            Severity::ModerateToHigh => self.moderate_to_high,
            Severity::Moderate => self.moderate,
        }
    }
}

/// Catalog-wide summary served by the statistics endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStatistics {
    pub total_diseases: usize,
    pub severity_distribution: SeverityDistribution,
}

impl CatalogStatistics {
    pub(crate) fn compute(records: &[DiseaseRecord]) -> Self {
        let mut severity_distribution = SeverityDistribution::default();
        for record in records {
            severity_distribution.count(record.severity);
        }
        Self {
            total_diseases: records.len(),
            severity_distribution,
        }
    }
}
