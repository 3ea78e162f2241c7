use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use canimex_core::anime::{MSG_INVALID_ID, MSG_MISSING_ID, MSG_NOT_FOUND};
use canimex_core::error::CoreError;

use crate::response::MessageResponse;

/// Application-level error type for HTTP handlers.
///
/// Input and not-found errors carry a JSON `{ "message": ... }` body.
/// Storage, body-decoding and internal failures are logged and answered with
/// a bare 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `canimex_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx, including pool acquisition failures.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body was not a valid anime document.
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// An unrecoverable failure with a human-readable message for the log.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(core) => {
                let (status, message) = match &core {
                    CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, MSG_NOT_FOUND),
                    CoreError::MissingId => (StatusCode::BAD_REQUEST, MSG_MISSING_ID),
                    CoreError::InvalidId(raw) => {
                        tracing::warn!(id = %raw, "Rejected non-numeric anime id");
                        (StatusCode::BAD_REQUEST, MSG_INVALID_ID)
                    }
                };
                (status, Json(MessageResponse::new(message))).into_response()
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            AppError::MalformedBody(err) => {
                tracing::warn!(error = %err, "Malformed request body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
