use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// The form handler renders these inline; the JSON API returns them through
/// `IntoResponse`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Course data unavailable: {0}")]
    FileAccess(String),

    #[error("{0}")]
    Request(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::FileAccess(msg) => {
                tracing::error!("Course corpus error: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "FILE_ACCESS_ERROR",
                    "Course data is unavailable".to_string(),
                )
            }
            AppError::Request(msg) => {
                tracing::warn!("Recommendation request failed: {msg}");
                (StatusCode::BAD_GATEWAY, "REQUEST_ERROR", msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
