//! Request and response bodies.
//!
//! Responses borrow from the catalog; they are serialized before the handler
//! returns, so nothing is cloned.

use serde::{Deserialize, Serialize};

use cropdoc_catalog::CatalogStatistics;
use cropdoc_contracts::{disease::DiseaseRecord, identity::HistoryEntry, matching::MatchResult};

/// Body of `POST /api/match-symptoms`. A missing field is treated as blank.
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub symptoms: String,
}

/// Body of `POST /api/search-diseases`. A missing field is treated as blank.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DiseaseListResponse<'a> {
    pub success: bool,
    pub count: usize,
    pub diseases: Vec<&'a DiseaseRecord>,
}

#[derive(Debug, Serialize)]
pub struct DiseaseResponse<'a> {
    pub success: bool,
    pub disease: &'a DiseaseRecord,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub success: bool,
    pub count: usize,
    pub results: Vec<&'a DiseaseRecord>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse<'a> {
    pub success: bool,
    pub count: usize,
    pub results: Vec<MatchResult<'a>>,
}

#[derive(Debug, Serialize)]
pub struct PlantResponse<'a> {
    pub success: bool,
    pub plant: String,
    pub count: usize,
    pub diseases: Vec<&'a DiseaseRecord>,
}

#[derive(Debug, Serialize)]
pub struct ServiceStatistics {
    #[serde(flatten)]
    pub catalog: CatalogStatistics,
    /// Registered identities with at least one recorded query.
    pub tracked_users: usize,
}

#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub success: bool,
    pub statistics: ServiceStatistics,
}

#[derive(Debug, Serialize)]
pub struct UserInfo<'a> {
    pub email: Option<&'a str>,
    pub is_guest: bool,
}

#[derive(Debug, Serialize)]
pub struct UserInfoResponse<'a> {
    pub success: bool,
    pub user: UserInfo<'a>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub count: usize,
    pub history: Vec<HistoryEntry>,
}
