//! Validation engine -- pure logic, no I/O.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::age::age_on;
use super::input::{Field, RegistrationInput};
use super::rules;

/// At most one message per field, ordered as the form renders them.
pub type FieldErrors = BTreeMap<Field, String>;

/// Outcome of running every rule against one input snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: FieldErrors,
}

impl ValidationResult {
    /// Message to show for `field`, if it failed.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// First failing field in form order.
    pub fn first_error(&self) -> Option<(Field, &str)> {
        self.errors
            .iter()
            .next()
            .map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// A registration that passed every rule, with its date of birth parsed.
///
/// The password is never serialized.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ValidRegistration {
    pub name: String,
    pub dob: NaiveDate,
    pub age: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl fmt::Debug for ValidRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidRegistration")
            .field("name", &self.name)
            .field("dob", &self.dob)
            .field("age", &self.age)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validate `input` as of `today`.
///
/// Per-field rules run first, each contributing at most one message. The
/// password match runs last and sets the `confirmPassword` entry when it
/// fails, replacing anything already there.
pub fn validate_on(input: &RegistrationInput, today: NaiveDate) -> ValidationResult {
    let (errors, _) = evaluate(input, today);
    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}

/// Run every rule, keeping the birth date when the dob rules pass.
fn evaluate(input: &RegistrationInput, today: NaiveDate) -> (FieldErrors, Option<NaiveDate>) {
    let mut errors = FieldErrors::new();

    let dob = rules::dob_rule(&input.dob, today);
    let checks = [
        (Field::Name, rules::check_name(&input.name)),
        (Field::Dob, dob.err()),
        (Field::Email, rules::check_email(&input.email)),
        (Field::Password, rules::check_password(&input.password)),
    ];
    for (field, failure) in checks {
        if let Some(msg) = failure {
            errors.insert(field, msg.to_string());
        }
    }

    if let Some(msg) = rules::check_passwords_match(&input.password, &input.confirm_password) {
        errors.insert(Field::ConfirmPassword, msg.to_string());
    }

    (errors, dob.ok())
}

/// Validate `input` as of the local calendar date.
pub fn validate(input: &RegistrationInput) -> ValidationResult {
    validate_on(input, today())
}

/// Validate `input` as of `today` and, when it passes, return the normalized
/// record.
pub fn parse_on(
    input: RegistrationInput,
    today: NaiveDate,
) -> Result<ValidRegistration, FieldErrors> {
    // An empty error map means the dob rules passed and produced a date.
    let dob = match evaluate(&input, today) {
        (errors, Some(dob)) if errors.is_empty() => dob,
        (errors, _) => return Err(errors),
    };

    Ok(ValidRegistration {
        age: age_on(dob, today),
        dob,
        name: input.name,
        email: input.email,
        password: input.password,
    })
}

/// [`parse_on`] as of the local calendar date.
pub fn parse(input: RegistrationInput) -> Result<ValidRegistration, FieldErrors> {
    parse_on(input, today())
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::registration::rules::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    /// Valid record: age 25 on [`today`].
    fn valid_input() -> RegistrationInput {
        RegistrationInput {
            name: "khan".into(),
            dob: "2000-01-01".into(),
            email: "x@y.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        }
    }

    #[test]
    fn valid_record_has_no_errors() {
        let result = validate_on(&valid_input(), today());
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.first_error(), None);
    }

    #[test]
    fn empty_record_reports_every_field() {
        let result = validate_on(&RegistrationInput::default(), today());
        assert!(!result.valid);
        assert_eq!(result.error(Field::Name), Some(MSG_NAME_TOO_SHORT));
        assert_eq!(result.error(Field::Dob), Some(MSG_DOB_REQUIRED));
        assert_eq!(result.error(Field::Email), Some(MSG_EMAIL_REQUIRED));
        assert_eq!(result.error(Field::Password), Some(MSG_PASSWORD_TOO_SHORT));
        // Both passwords are empty, so they match.
        assert_eq!(result.error(Field::ConfirmPassword), None);
        assert_eq!(result.first_error(), Some((Field::Name, MSG_NAME_TOO_SHORT)));
    }

    #[test]
    fn mismatch_is_reported_on_confirm_password() {
        let mut input = valid_input();
        input.password = "abcdef".into();
        input.confirm_password = "abcdeg".into();
        let result = validate_on(&input, today());
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.error(Field::ConfirmPassword), Some(MSG_PASSWORDS_MISMATCH));
        assert_eq!(result.error(Field::Password), None);
    }

    #[test]
    fn short_password_and_mismatch_are_both_reported() {
        let mut input = valid_input();
        input.password = "abc".into();
        let result = validate_on(&input, today());
        assert_eq!(result.error(Field::Password), Some(MSG_PASSWORD_TOO_SHORT));
        assert_eq!(result.error(Field::ConfirmPassword), Some(MSG_PASSWORDS_MISMATCH));
    }

    #[test]
    fn field_rules_are_independent() {
        let mut input = valid_input();
        input.name = "x".repeat(25);
        input.email = "not-an-email".into();
        let result = validate_on(&input, today());
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.error(Field::Name), Some(MSG_NAME_TOO_LONG));
        assert_eq!(result.error(Field::Email), Some(MSG_EMAIL_INVALID));
    }

    #[test]
    fn age_boundaries() {
        let cases = [
            ("2015-06-16", false), // 9
            ("2015-06-15", true),  // 10
            ("1944-06-16", true),  // 80
            ("1944-06-15", false), // 81
        ];
        for (dob, ok) in cases {
            let mut input = valid_input();
            input.dob = dob.into();
            let result = validate_on(&input, today());
            assert_eq!(result.valid, ok, "dob {dob}");
            if !ok {
                assert_eq!(result.error(Field::Dob), Some(MSG_AGE_OUT_OF_RANGE));
            }
        }
    }

    #[test]
    fn validation_is_idempotent() {
        let mut input = valid_input();
        input.email = "nope".into();
        assert_eq!(validate_on(&input, today()), validate_on(&input, today()));
    }

    #[test]
    fn result_serializes_errors_by_wire_name() {
        let mut input = valid_input();
        input.confirm_password = "other12".into();
        let value = serde_json::to_value(validate_on(&input, today())).unwrap();
        assert_eq!(
            value,
            json!({
                "valid": false,
                "errors": { "confirmPassword": MSG_PASSWORDS_MISMATCH }
            })
        );
    }

    #[test]
    fn parse_returns_normalized_record() {
        let registration = parse_on(valid_input(), today()).unwrap();
        assert_eq!(registration.name, "khan");
        assert_eq!(registration.dob, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(registration.age, 25);
        assert_eq!(registration.password, "secret1");
    }

    #[test]
    fn parse_rejects_invalid_record() {
        let mut input = valid_input();
        input.dob = String::new();
        assert_matches!(
            parse_on(input, today()),
            Err(errors) if errors.get(&Field::Dob).map(String::as_str) == Some(MSG_DOB_REQUIRED)
        );
    }

    #[test]
    fn parse_errors_are_the_validation_errors() {
        let mut input = valid_input();
        input.email = "a@localhost".into();
        input.dob = "1900-01-01".into();
        let expected = validate_on(&input, today()).errors;
        let errors = parse_on(input, today()).unwrap_err();
        assert_eq!(errors, expected);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn valid_registration_never_serializes_password() {
        let registration = parse_on(valid_input(), today()).unwrap();
        let value = serde_json::to_value(&registration).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["dob"], "2000-01-01");
        assert_eq!(value["age"], 25);
        assert!(!format!("{registration:?}").contains("secret1"));
    }

    #[test]
    fn validate_uses_local_date() {
        // 30 years before any plausible "today" is always in range.
        let mut input = valid_input();
        let dob = chrono::Local::now().date_naive() - chrono::Days::new(30 * 366);
        input.dob = dob.format("%Y-%m-%d").to_string();
        assert!(validate(&input).valid);
        assert!(parse(input).is_ok());
    }
}
