use crate::ApiError;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use log::debug;

/// Answers every unmatched path with a JSON 404.
pub async fn default_handler(uri: Uri) -> Response {
    debug!("no route for {}", uri.path());

    ApiError::NotFound(format!("{} not found", uri.path())).into_response()
}
