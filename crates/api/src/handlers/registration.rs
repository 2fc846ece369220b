//! Handlers for the `/registrations` resource.
//!
//! Live validation (whole record or one field) never fails on bad input:
//! rule failures are returned as data. Only submission turns them into an
//! error response.

use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::Json;
use regform_core::registration::{
    self, Field, RegistrationInput, ValidRegistration, ValidationResult,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// Single-field validation outcome.
#[derive(Debug, Serialize)]
pub struct FieldValidation {
    pub field: Field,
    pub error: Option<String>,
}

/// POST /api/v1/registrations/validate
///
/// Run every rule and return the full result.
pub async fn validate(
    payload: Result<Json<RegistrationInput>, JsonRejection>,
) -> AppResult<Json<DataResponse<ValidationResult>>> {
    let Json(input) = payload?;
    let result = registration::validate(&input);
    tracing::debug!(valid = result.valid, failed = result.errors.len(), "Validated registration");
    Ok(Json(DataResponse { data: result }))
}

/// POST /api/v1/registrations/validate/{field}
///
/// Validate the whole record but report only `field`, so the password match
/// still sees both passwords.
pub async fn validate_field(
    Path(field): Path<String>,
    payload: Result<Json<RegistrationInput>, JsonRejection>,
) -> AppResult<Json<DataResponse<FieldValidation>>> {
    let Json(input) = payload?;
    let field: Field = field.parse()?;
    let result = registration::validate(&input);
    Ok(Json(DataResponse {
        data: FieldValidation {
            field,
            error: result.error(field).map(str::to_string),
        },
    }))
}

/// POST /api/v1/registrations
///
/// Accept a registration only if it passes every rule. Nothing is stored;
/// the accepted record is logged and echoed back without the password.
pub async fn submit(
    payload: Result<Json<RegistrationInput>, JsonRejection>,
) -> AppResult<Json<DataResponse<ValidRegistration>>> {
    let Json(input) = payload?;
    let accepted = registration::parse(input).map_err(|errors| {
        tracing::info!(
            fields = ?errors.keys().map(Field::as_str).collect::<Vec<_>>(),
            "Registration rejected"
        );
        AppError::InvalidRegistration(errors)
    })?;

    tracing::info!(
        name = %accepted.name,
        email = %accepted.email,
        dob = %accepted.dob,
        age = accepted.age,
        "Registration submitted"
    );

    Ok(Json(DataResponse { data: accepted }))
}
