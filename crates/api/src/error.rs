use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use studypulse_core::error::CoreError;
use studypulse_identity::IdentityError;
use studypulse_insights::InsightsError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and the collaborator error types
/// for upstream failures. Implements [`IntoResponse`] to produce the
/// boundary's `{"error": string}` JSON bodies.
///
/// Upstream messages (store, identity, insights) are forwarded verbatim:
/// the consuming client displays them directly, so no translation or
/// redaction happens here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `studypulse_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A hosted-store error from sqlx.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// An identity-provider error. Defaults to 400; endpoints that
    /// surface provider failures as 500 remap explicitly.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// A generative-backend error (always 500).
    #[error(transparent)]
    Insights(#[from] InsightsError),

    /// A bad request with a human-readable message.
    #[error("{0}")]
    BadRequest(String),

    /// An internal failure whose message is still forwarded.
    #[error("{0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
                }
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Store error");
                (StatusCode::BAD_REQUEST, err.to_string())
            }

            AppError::Identity(err) => (StatusCode::BAD_REQUEST, err.to_string()),

            AppError::Insights(err) => {
                tracing::error!(error = %err, "Insights backend error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
