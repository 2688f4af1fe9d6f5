use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::providers::ProviderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Failures are rendered as `{"error": "<message>"}` — the envelope the admin
/// UI expects from every endpoint.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The text or image provider failed (non-2xx, transport error, or an
    /// empty result). Retryable from the caller's side; this service never
    /// retries on its own.
    #[error("Upstream generation error: {0}")]
    Upstream(#[from] ProviderError),

    /// The text provider returned 2xx but the body was missing a required
    /// labeled section. Not retryable without changing the prompt.
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upstream(e) => {
                tracing::error!("Upstream provider error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "A content generation provider error occurred".to_string(),
                )
            }
            AppError::MalformedResponse(msg) => {
                tracing::error!("Malformed provider response: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "The content generation provider returned an unusable response".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
