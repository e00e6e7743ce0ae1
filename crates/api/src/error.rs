use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reel_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{ "error": <message>, "code": <CODE> }`, with extra keys for
/// some variants (`details` for validation failures, `id` for lookups).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `reel_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body could not be read as JSON.
    #[error("Invalid JSON body: {0}")]
    Json(#[from] JsonRejection),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    json!({
                        "error": format!("{entity} not found"),
                        "code": "NOT_FOUND",
                        "id": id,
                    }),
                ),
                CoreError::Validation(failure) => (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": failure.to_string(),
                        "code": "VALIDATION_ERROR",
                        "details": failure.issues(),
                    }),
                ),
                CoreError::OriginNotAllowed(origin) => {
                    tracing::warn!(%origin, "Rejected request from disallowed origin");
                    (
                        StatusCode::FORBIDDEN,
                        json!({
                            "error": "Not allowed by CORS",
                            "code": "ORIGIN_NOT_ALLOWED",
                        }),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::Json(rejection) => (
                rejection.status(),
                json!({
                    "error": rejection.body_text(),
                    "code": "INVALID_JSON",
                }),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "An internal error occurred",
                        "code": "INTERNAL_ERROR",
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
