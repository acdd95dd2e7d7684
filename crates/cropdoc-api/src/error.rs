//! HTTP error mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use cropdoc_contracts::error::CropdocError;

/// A `CropdocError` on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub CropdocError);

impl From<CropdocError> for ApiError {
    fn from(err: CropdocError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(CropdocError::invalid_input(format!(
            "malformed JSON body: {}",
            rejection.body_text()
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CropdocError::InvalidInput { reason } => (StatusCode::BAD_REQUEST, reason.clone()),
            CropdocError::NotFound { .. } => (StatusCode::NOT_FOUND, self.0.to_string()),
            CropdocError::Forbidden { reason } => (StatusCode::FORBIDDEN, reason.clone()),
            CropdocError::HistoryUnavailable { .. } => {
                tracing::error!(error = %self.0, "history store failure");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "History temporarily unavailable".to_string(),
                )
            }
            CropdocError::CatalogError { .. }
            | CropdocError::ConfigError { .. }
            | CropdocError::ServerError { .. } => {
                tracing::error!(error = %self.0, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}
