//! Input validation predicates.
//!
//! All bounds are inclusive: a value sitting exactly on a limit is valid.

use std::fmt;
use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use thiserror::Error;

/// Username length accepted by [`is_valid_username`].
pub const USERNAME_LENGTH: RangeInclusive<usize> = 5..=15;

/// Username length accepted by [`validate_user_input`].
pub const PROFILE_USERNAME_LENGTH: RangeInclusive<usize> = 3..=255;

/// Age accepted by [`validate_user_input`].
pub const PROFILE_AGE: RangeInclusive<u32> = 18..=100;

/// Minimum password length for [`is_strong_password`].
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum driving age per ISO country code.
const LEGAL_DRIVING_AGE: &[(&str, u32)] = &[("US", 16), ("UK", 17)];

/// A single validation failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid username")]
    InvalidUsername,
    #[error("Invalid age")]
    InvalidAge,
    #[error("Invalid country code")]
    InvalidCountryCode,
}

/// Every failure found by [`validate_user_input`], in field order.
///
/// Displays as a comma-separated list, e.g. `Invalid username, Invalid age`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputErrors(Vec<ValidationError>);

impl InputErrors {
    /// The individual failures.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }
}

impl fmt::Display for InputErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join(", "))
    }
}

impl std::error::Error for InputErrors {}

/// Whether `username` is between 5 and 15 characters long.
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_LENGTH.contains(&username.chars().count())
}

/// Validate a sign-up form, collecting every failure.
///
/// # Errors
///
/// Returns [`InputErrors`] listing each field outside its accepted range.
pub fn validate_user_input(username: &str, age: u32) -> Result<(), InputErrors> {
    let mut errors = Vec::new();

    if !PROFILE_USERNAME_LENGTH.contains(&username.chars().count()) {
        errors.push(ValidationError::InvalidUsername);
    }
    if !PROFILE_AGE.contains(&age) {
        errors.push(ValidationError::InvalidAge);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(InputErrors(errors))
    }
}

/// Whether `price` lies within `[min, max]`.
#[must_use]
pub fn is_price_in_range(price: Decimal, min: Decimal, max: Decimal) -> bool {
    (min..=max).contains(&price)
}

/// Whether someone aged `age` may drive in `country_code`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCountryCode`] for countries without a
/// known legal driving age.
pub fn can_drive(age: u32, country_code: &str) -> Result<bool, ValidationError> {
    LEGAL_DRIVING_AGE
        .iter()
        .find(|(code, _)| *code == country_code)
        .map(|&(_, legal_age)| age >= legal_age)
        .ok_or(ValidationError::InvalidCountryCode)
}

/// Whether `password` has at least eight characters including an uppercase
/// letter, a lowercase letter and a digit.
#[must_use]
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(char::is_uppercase)
        && password.chars().any(char::is_lowercase)
        && password.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("abcde", true)]
    #[case("abcdefghijklmno", true)]
    #[case("abcd", false)]
    #[case("abcdefghijklmnop", false)]
    #[case("", false)]
    fn test_is_valid_username(#[case] username: &str, #[case] expected: bool) {
        assert_eq!(is_valid_username(username), expected);
    }

    #[test]
    fn test_username_counts_chars_not_bytes() {
        assert!(is_valid_username("ñandú"));
    }

    #[test]
    fn test_validate_user_input_ok() {
        assert_eq!(validate_user_input("ada", 18), Ok(()));
        assert_eq!(validate_user_input(&"a".repeat(255), 100), Ok(()));
    }

    #[rstest]
    #[case("ab", 42, "Invalid username")]
    #[case(&"a".repeat(256), 42, "Invalid username")]
    #[case("ada", 17, "Invalid age")]
    #[case("ada", 101, "Invalid age")]
    #[case("", 0, "Invalid username, Invalid age")]
    fn test_validate_user_input_errors(
        #[case] username: &str,
        #[case] age: u32,
        #[case] expected: &str,
    ) {
        let err = validate_user_input(username, age).unwrap_err();
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_validate_user_input_collects_in_order() {
        let err = validate_user_input("x", 5).unwrap_err();
        assert_eq!(
            err.errors(),
            &[ValidationError::InvalidUsername, ValidationError::InvalidAge]
        );
    }

    #[rstest]
    #[case(0, true)]
    #[case(50, true)]
    #[case(100, true)]
    #[case(-10, false)]
    #[case(200, false)]
    fn test_is_price_in_range(#[case] price: i64, #[case] expected: bool) {
        let (min, max) = (Decimal::ZERO, Decimal::ONE_HUNDRED);
        assert_eq!(is_price_in_range(Decimal::from(price), min, max), expected);
    }

    #[rstest]
    #[case(15, "US", false)]
    #[case(16, "US", true)]
    #[case(17, "US", true)]
    #[case(16, "UK", false)]
    #[case(17, "UK", true)]
    #[case(18, "UK", true)]
    fn test_can_drive(#[case] age: u32, #[case] country: &str, #[case] expected: bool) {
        assert_eq!(can_drive(age, country), Ok(expected));
    }

    #[test]
    fn test_can_drive_unknown_country() {
        let err = can_drive(20, "FR").unwrap_err();
        assert_eq!(err, ValidationError::InvalidCountryCode);
        assert_eq!(err.to_string(), "Invalid country code");
    }

    #[rstest]
    #[case("Passw0rd", true)]
    #[case("Sh0rt", false)]
    #[case("alllowercase1", false)]
    #[case("ALLUPPERCASE1", false)]
    #[case("NoDigitsHere", false)]
    fn test_is_strong_password(#[case] password: &str, #[case] expected: bool) {
        assert_eq!(is_strong_password(password), expected);
    }
}
