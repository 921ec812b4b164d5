//! HTTP error mapping

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use qa_application::QaServiceError;

/// Errors surfaced to HTTP clients as `{"detail": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Session not found")]
    NotFound,
    #[error("Transformation failed for '{question}': {reason}")]
    TransformFailure { question: String, reason: String },
}

impl From<QaServiceError> for ApiError {
    fn from(error: QaServiceError) -> Self {
        match error {
            QaServiceError::NotFound(_) => ApiError::NotFound,
            QaServiceError::TransformFailure { question, source } => ApiError::TransformFailure {
                question,
                reason: source.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::TransformFailure { .. } => StatusCode::BAD_GATEWAY,
        };
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}
