//! Field rules for the registration form.
//!
//! Each check returns the message of the first rule that fails for its field,
//! or `None` when the field is acceptable. Checks are independent of each
//! other; the password match is the only rule that reads two fields.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::age::{age_on, is_age_allowed, parse_dob};

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 20;
pub const PASSWORD_MIN_LEN: usize = 6;

pub const MSG_NAME_TOO_SHORT: &str = "Minimum length should be 3";
pub const MSG_NAME_TOO_LONG: &str = "Maximum length should be 20";
pub const MSG_DOB_REQUIRED: &str = "Date of birth is required";
pub const MSG_AGE_OUT_OF_RANGE: &str = "Age must be between 10 and 80";
pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_EMAIL_INVALID: &str = "Invalid email address";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const MSG_PASSWORDS_MISMATCH: &str = "Passwords do not match";

/// Local part, then a dotted domain ending in a TLD of two or more letters.
/// A leading dot and consecutive dots are rejected separately.
const EMAIL_PATTERN: &str = r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+-]@([A-Z0-9][A-Z0-9-]*\.)+[A-Z]{2,}$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid email regex"));

// Lengths count UTF-16 code units, so a character outside the BMP counts twice.
fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn is_email(s: &str) -> bool {
    !s.starts_with('.') && !s.contains("..") && EMAIL_RE.is_match(s)
}

pub fn check_name(name: &str) -> Option<&'static str> {
    let len = text_len(name);
    if len < NAME_MIN_LEN {
        Some(MSG_NAME_TOO_SHORT)
    } else if len > NAME_MAX_LEN {
        Some(MSG_NAME_TOO_LONG)
    } else {
        None
    }
}

/// The parsed birth date, or the message of the first failing dob rule.
///
/// An unparsable date of birth fails the age rule rather than getting a
/// message of its own.
pub fn dob_rule(dob: &str, today: NaiveDate) -> Result<NaiveDate, &'static str> {
    if dob.is_empty() {
        return Err(MSG_DOB_REQUIRED);
    }
    match parse_dob(dob) {
        Some(birth) if is_age_allowed(age_on(birth, today)) => Ok(birth),
        _ => Err(MSG_AGE_OUT_OF_RANGE),
    }
}

pub fn check_dob(dob: &str, today: NaiveDate) -> Option<&'static str> {
    dob_rule(dob, today).err()
}

pub fn check_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(MSG_EMAIL_REQUIRED)
    } else if !is_email(email) {
        Some(MSG_EMAIL_INVALID)
    } else {
        None
    }
}

pub fn check_password(password: &str) -> Option<&'static str> {
    if text_len(password) < PASSWORD_MIN_LEN {
        Some(MSG_PASSWORD_TOO_SHORT)
    } else {
        None
    }
}

/// Cross-field rule; its message belongs to `confirmPassword`.
pub fn check_passwords_match(password: &str, confirm: &str) -> Option<&'static str> {
    (password != confirm).then_some(MSG_PASSWORDS_MISMATCH)
}
