use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use regform_core::error::CoreError;
use regform_core::registration::FieldErrors;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `regform_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A submitted registration failed one or more field rules.
    #[error("Registration rejected: {} field(s) invalid", .0.len())]
    InvalidRegistration(FieldErrors),

    /// A request body that could not be read as a registration.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::UnknownField(name) => (
                    StatusCode::BAD_REQUEST,
                    "BAD_REQUEST",
                    format!("Unknown field '{name}'"),
                ),
            },

            // --- Field rule failures carry the per-field messages ---
            AppError::InvalidRegistration(errors) => {
                let body = json!({
                    "error": "Registration is invalid",
                    "code": "VALIDATION_FAILED",
                    "errors": errors,
                });
                return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response();
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
