use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use kural_core::CoreError;

/// Maps core errors onto HTTP responses. Expected conditions keep their
/// message; internal failures are logged in full and surfaced generically.
pub struct ApiError(CoreError);

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CoreError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            CoreError::Internal(err) => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        let body = Json(json!({ "error": message, "kind": self.0.kind() }));
        (status, body).into_response()
    }
}
