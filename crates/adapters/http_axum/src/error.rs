//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use pulsedash_domain::error::PulseDashError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`PulseDashError`] to an HTTP response with appropriate status code.
pub struct ApiError(PulseDashError);

impl From<PulseDashError> for ApiError {
    fn from(err: PulseDashError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            PulseDashError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            PulseDashError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
