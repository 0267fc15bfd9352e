use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use league_core::StoreError;
use serde_json::json;

/// Custom error type for API handlers
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();

        match err {
            StoreError::DuplicateLeague(_) => ApiError::Conflict(message),
            StoreError::LeagueNotFound(_) => ApiError::NotFound(message),
            StoreError::InvalidId
            | StoreError::NoOpenLeague
            | StoreError::StatusRegression(_)
            | StoreError::InvalidMatch { .. } => ApiError::BadRequest(message),
            StoreError::Standings(_) => ApiError::InternalError(message),
        }
    }
}

/// Helper type for handler results
pub type ApiResult<T> = Result<T, ApiError>;
