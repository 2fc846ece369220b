//! Headless registration form controller.
//!
//! Owns the values the user has entered and the latest validation result.
//! Nothing is validated until the first submit; from then on every change
//! re-validates the whole record so messages clear as soon as they are fixed.

use chrono::NaiveDate;

use super::engine::{parse_on, validate_on, FieldErrors, ValidRegistration, ValidationResult};
use super::input::{Field, RegistrationInput};

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    values: RegistrationInput,
    result: Option<ValidationResult>,
    submit_count: u32,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-filled values.
    pub fn with_values(values: RegistrationInput) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn values(&self) -> &RegistrationInput {
        &self.values
    }

    pub fn is_submitted(&self) -> bool {
        self.submit_count > 0
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Latest result, `None` before the first submit.
    pub fn result(&self) -> Option<&ValidationResult> {
        self.result.as_ref()
    }

    /// Message to render under `field`, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.result.as_ref().and_then(|r| r.error(field))
    }

    /// Record a change to one field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>, today: NaiveDate) {
        self.values.set(field, value);
        if self.is_submitted() {
            self.result = Some(validate_on(&self.values, today));
        }
    }

    /// Validate everything and hand back the record only if it passed.
    pub fn submit(&mut self, today: NaiveDate) -> Result<ValidRegistration, FieldErrors> {
        self.submit_count += 1;
        let result = validate_on(&self.values, today);
        let outcome = if result.valid {
            parse_on(self.values.clone(), today)
        } else {
            Err(result.errors.clone())
        };
        self.result = Some(result);
        outcome
    }

    /// Clear values, messages and the submit count.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
