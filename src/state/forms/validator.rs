//! Field validation rules
//!
//! Pure classification of raw field text. Both validators are total: every
//! input yields a [`ValidationResult`], never an error.

use super::field::Field;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Legacy platform email pattern, anchored for a full match
const EMAIL_PATTERN: &str = concat!(
    r"^[a-zA-Z0-9+._%\-]{1,256}",
    r"@",
    r"[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}",
    r"(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
);

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Minimum password length in characters
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Symbols accepted as the password's special character
pub const PASSWORD_SYMBOLS: &str = "\\/%§\"&“|`´}{°><:.;#')(@_$!?*=^-";

/// Classification of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidEmail,
    InvalidPassword,
}

/// Outcome of validating one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_kind: Option<ErrorKind>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_kind: None,
        }
    }

    pub fn invalid(kind: ErrorKind) -> Self {
        Self {
            is_valid: false,
            error_kind: Some(kind),
        }
    }

    fn from_check(passed: bool, kind: ErrorKind) -> Self {
        if passed {
            Self::valid()
        } else {
            Self::invalid(kind)
        }
    }
}

/// Validate an email address
pub fn validate_email(text: &str) -> ValidationResult {
    ValidationResult::from_check(EMAIL_REGEX.is_match(text), ErrorKind::InvalidEmail)
}

/// Validate a password.
///
/// Requires at least [`PASSWORD_MIN_LENGTH`] characters on a single line, with
/// at least one ASCII digit, one lowercase letter, one uppercase letter and one
/// character from [`PASSWORD_SYMBOLS`].
pub fn validate_password(text: &str) -> ValidationResult {
    let single_line = !text.chars().any(is_line_terminator);
    let long_enough = text.chars().count() >= PASSWORD_MIN_LENGTH;
    let has_digit = text.chars().any(|c| c.is_ascii_digit());
    let has_lower = text.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = text.chars().any(|c| c.is_ascii_uppercase());
    let has_symbol = text.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    ValidationResult::from_check(
        single_line && long_enough && has_digit && has_lower && has_upper && has_symbol,
        ErrorKind::InvalidPassword,
    )
}

/// Validate the text of a given field
pub fn validate(field: Field, text: &str) -> ValidationResult {
    match field {
        Field::Email => validate_email(text),
        Field::Password => validate_password(text),
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email {
        use super::*;

        #[test]
        fn test_plain_word_is_invalid() {
            let result = validate_email("foo");
            assert!(!result.is_valid);
            assert_eq!(result.error_kind, Some(ErrorKind::InvalidEmail));
        }

        #[test]
        fn test_simple_address_is_valid() {
            assert_eq!(validate_email("foo@bar.com"), ValidationResult::valid());
            assert!(validate_email("a@b.com").is_valid);
        }

        #[test]
        fn test_local_part_symbols_are_accepted() {
            assert!(validate_email("first.last+tag_1%x-y@mail.example.org").is_valid);
        }

        #[test]
        fn test_domain_requires_a_dot() {
            assert!(!validate_email("foo@bar").is_valid);
        }

        #[test]
        fn test_missing_parts_are_invalid() {
            assert!(!validate_email("").is_valid);
            assert!(!validate_email("@bar.com").is_valid);
            assert!(!validate_email("foo@").is_valid);
            assert!(!validate_email("foo@.com").is_valid);
            assert!(!validate_email("foo@bar.").is_valid);
        }

        #[test]
        fn test_whitespace_is_rejected() {
            assert!(!validate_email("foo bar@baz.com").is_valid);
            assert!(!validate_email(" foo@bar.com").is_valid);
            assert!(!validate_email("foo@bar.com\n").is_valid);
        }

        #[test]
        fn test_domain_label_cannot_start_with_hyphen() {
            assert!(!validate_email("foo@-bar.com").is_valid);
            assert!(validate_email("foo@b-ar.com").is_valid);
        }

        #[test]
        fn test_double_at_is_invalid() {
            assert!(!validate_email("foo@@bar.com").is_valid);
            assert!(!validate_email("foo@bar@baz.com").is_valid);
        }

        #[test]
        fn test_overlong_domain_label_is_invalid() {
            let tld = "a".repeat(27);
            assert!(!validate_email(&format!("foo@bar.{tld}")).is_valid);
            let tld = "a".repeat(26);
            assert!(validate_email(&format!("foo@bar.{tld}")).is_valid);
        }
    }

    mod password {
        use super::*;

        #[test]
        fn test_reference_vectors() {
            assert!(validate_password("Abcdef1!").is_valid);

            let result = validate_password("abcdef12");
            assert!(!result.is_valid);
            assert_eq!(result.error_kind, Some(ErrorKind::InvalidPassword));
        }

        #[test]
        fn test_each_rule_is_required() {
            // too short
            assert!(!validate_password("Abcde1!").is_valid);
            // no digit
            assert!(!validate_password("Abcdefg!").is_valid);
            // no lowercase
            assert!(!validate_password("ABCDEF1!").is_valid);
            // no uppercase
            assert!(!validate_password("abcdef1!").is_valid);
            // no symbol
            assert!(!validate_password("Abcdefg1").is_valid);
        }

        #[test]
        fn test_every_symbol_counts() {
            for symbol in PASSWORD_SYMBOLS.chars() {
                let candidate = format!("Abcdef1{symbol}");
                assert!(
                    validate_password(&candidate).is_valid,
                    "symbol {symbol:?} should satisfy the symbol rule"
                );
            }
        }

        #[test]
        fn test_unlisted_symbols_do_not_count() {
            assert!(!validate_password("Abcdef1~").is_valid);
            assert!(!validate_password("Abcdef1+").is_valid);
            assert!(!validate_password("Abcdef1[").is_valid);
        }

        #[test]
        fn test_length_counts_characters() {
            // 8 characters, more than 8 bytes
            assert!(validate_password("Ab1§§§§§").is_valid);
        }

        #[test]
        fn test_line_breaks_are_rejected() {
            assert!(!validate_password("Abcdef1!\n").is_valid);
            assert!(!validate_password("Abc\ndef1!").is_valid);
        }

        #[test]
        fn test_non_ascii_letters_do_not_satisfy_case_rules() {
            assert!(!validate_password("ÄÖÜabc1!").is_valid);
            assert!(!validate_password("äöüABC1!").is_valid);
        }
    }

    mod dispatch {
        use super::*;

        #[test]
        fn test_validate_routes_by_field() {
            assert_eq!(
                validate(Field::Email, "bad").error_kind,
                Some(ErrorKind::InvalidEmail)
            );
            assert_eq!(
                validate(Field::Password, "bad").error_kind,
                Some(ErrorKind::InvalidPassword)
            );
            assert!(validate(Field::Email, "a@b.com").is_valid);
            assert!(validate(Field::Password, "Abcdef1!").is_valid);
        }

        #[test]
        fn test_validation_is_idempotent() {
            let inputs = ["", "foo", "a@b.com", "Abcdef1!", "abcdef12", "x y@z.io"];
            for input in inputs {
                for field in Field::ALL {
                    assert_eq!(validate(field, input), validate(field, input));
                }
            }
        }

        #[test]
        fn test_error_kind_present_iff_invalid() {
            let inputs = ["", "foo", "a@b.com", "Abcdef1!", "abcdef12"];
            for input in inputs {
                for field in Field::ALL {
                    let result = validate(field, input);
                    assert_eq!(result.is_valid, result.error_kind.is_none());
                }
            }
        }
    }
}
