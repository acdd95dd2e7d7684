//! HTTP handlers for the cropdoc API

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, info};

use cropdoc_contracts::error::CropdocError;
use cropdoc_core::{match_symptoms as rank_diseases, normalize_query, search};
use cropdoc_history::record_query;

use crate::{error::ApiError, identity::Caller, models::*, state::AppState};

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "cropdoc disease API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// All diseases, in catalog order
pub async fn list_diseases(State(state): State<Arc<AppState>>) -> Response {
    let diseases: Vec<_> = state.catalog.records().iter().collect();
    Json(DiseaseListResponse {
        success: true,
        count: diseases.len(),
        diseases,
    })
    .into_response()
}

/// One disease by id
pub async fn get_disease(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let disease = state.catalog.get(&id)?;
    Ok(Json(DiseaseResponse {
        success: true,
        disease,
    })
    .into_response())
}

/// Free-text search over name, plant, and scientific name
pub async fn search_diseases(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let results = search::search(&request.query, state.catalog.records())?;

    debug!(query = %request.query, hits = results.len(), "disease search");

    Ok(Json(SearchResponse {
        success: true,
        count: results.len(),
        results,
    })
    .into_response())
}

/// Rank diseases against a symptom description.
///
/// Registered callers get the normalized query appended to their history
/// once it passes validation.
pub async fn match_symptoms(
    State(state): State<Arc<AppState>>,
    Caller(identity): Caller,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let query = normalize_query(&request.symptoms)?;

    record_query(state.history.as_ref(), &identity, &query)?;

    let results = rank_diseases(&query, state.catalog.records())?;

    info!(
        guest = identity.is_guest(),
        matched = results.len(),
        "symptom match served"
    );

    Ok(Json(MatchResponse {
        success: true,
        count: results.len(),
        results,
    })
    .into_response())
}

/// Diseases affecting a plant
pub async fn diseases_by_plant(
    State(state): State<Arc<AppState>>,
    Path(plant): Path<String>,
) -> Response {
    let diseases = search::by_plant(&plant, state.catalog.records());
    Json(PlantResponse {
        success: true,
        plant: plant.to_lowercase(),
        count: diseases.len(),
        diseases,
    })
    .into_response()
}

/// Catalog and usage statistics
pub async fn statistics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatisticsResponse>, ApiError> {
    Ok(Json(StatisticsResponse {
        success: true,
        statistics: ServiceStatistics {
            catalog: state.catalog.statistics(),
            tracked_users: state.history.owner_count()?,
        },
    }))
}

/// Who the service thinks the caller is
pub async fn user_info(Caller(identity): Caller) -> Response {
    Json(UserInfoResponse {
        success: true,
        user: UserInfo {
            email: identity.owner(),
            is_guest: identity.is_guest(),
        },
    })
    .into_response()
}

/// The caller's recorded symptom queries, oldest first
pub async fn search_history(
    State(state): State<Arc<AppState>>,
    Caller(identity): Caller,
) -> Result<Json<HistoryResponse>, ApiError> {
    let owner = identity.owner().ok_or_else(|| CropdocError::Forbidden {
        reason: "search history only available for registered users".to_string(),
    })?;

    let history = state.history.entries(owner)?;
    Ok(Json(HistoryResponse {
        success: true,
        count: history.len(),
        history,
    }))
}

/// Fallback for unknown routes
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Resource not found",
        })),
    )
        .into_response()
}
