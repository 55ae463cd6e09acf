use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inventory_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the status-code mapping the API
/// contract promises:
///
/// - validation failure -> 400 with the raw field→message object
/// - coercion failure   -> 400 with the fixed dual "must be numeric" body
/// - not found          -> 404 with the id in the message
/// - identity mismatch  -> 404 with `{"product": "not found"}`
/// - store failure      -> 502 with `{"general": "request error"}`
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `inventory_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // --- CoreError variants ---
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{entity} with id {id} not found") }),
            ),
            AppError::Core(CoreError::Validation(errors)) => {
                // The body is the flat field→message object itself.
                (StatusCode::BAD_REQUEST, json!(errors))
            }
            AppError::Core(CoreError::Coercion) => (
                StatusCode::BAD_REQUEST,
                // Both entries are always emitted together, whichever
                // field actually mismatched. See `CoreError::Coercion`.
                json!({
                    "price": "must be numeric",
                    "stockQuantity": "must be numeric",
                }),
            ),
            AppError::Core(CoreError::IdentityMismatch) => {
                (StatusCode::NOT_FOUND, json!({ "product": "not found" }))
            }
            AppError::Core(CoreError::Upstream(msg)) => {
                tracing::error!(error = %msg, "Upstream store failure");
                (StatusCode::BAD_GATEWAY, json!({ "general": "request error" }))
            }

            // --- Database errors: sanitized, detail goes to the log ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::BAD_GATEWAY, json!({ "general": "request error" }))
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
        };

        (status, axum::Json(body)).into_response()
    }
}
