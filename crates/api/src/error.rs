use archive_core::error::CoreError;
use archive_db::DbError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `archive_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store error from `archive_db`.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// No route matches the request path.
    #[error("Not Found")]
    RouteNotFound,

    /// The path matches but the method is not served there.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description.
    #[schema(example = "Video 65f1c0ffee0000000000abcd not found")]
    pub detail: String,
    /// Machine-readable error code.
    #[schema(example = "NOT_FOUND")]
    pub code: &'static str,
}

/// Any body that cannot be decoded into the target type is a validation
/// failure: syntax errors, a missing or wrong content type, missing fields.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, detail) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::Validation(msg) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    msg.clone(),
                ),
            },

            // --- Store errors ---
            AppError::Database(err) => classify_db_error(err),

            // --- HTTP-specific errors ---
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                self.to_string(),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        (status, axum::Json(ErrorBody { detail, code })).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a store error into an HTTP status, error code, and message.
///
/// - Duplicate `_id` maps to 409.
/// - Everything else (connectivity, server errors) maps to 500 with a
///   sanitized message.
fn classify_db_error(err: &DbError) -> (StatusCode, &'static str, String) {
    if err.is_duplicate_key() {
        return (
            StatusCode::CONFLICT,
            "CONFLICT",
            "Duplicate value violates a unique index".to_string(),
        );
    }
    tracing::error!(error = %err, "Database error");
    internal()
}
