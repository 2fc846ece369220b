//! Date-of-birth parsing and age computation.

use chrono::{Datelike, NaiveDate};

/// Youngest accepted age, inclusive.
pub const MIN_AGE: i32 = 10;

/// Oldest accepted age, inclusive.
pub const MAX_AGE: i32 = 80;

const DOB_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date of birth.
///
/// Returns `None` for anything that is not exactly that shape or does not
/// name a real calendar date (e.g. `2023-02-30`).
pub fn parse_dob(dob: &str) -> Option<NaiveDate> {
    let bytes = dob.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(dob, DOB_FORMAT).ok()
}

/// Age in whole years on `today` for someone born on `birth`.
///
/// One year less than the year difference until the birthday has been
/// reached in `today`'s year. Negative for birth dates after `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Whether `age` falls within [`MIN_AGE`, `MAX_AGE`].
pub fn is_age_allowed(age: i32) -> bool {
    (MIN_AGE..=MAX_AGE).contains(&age)
}
