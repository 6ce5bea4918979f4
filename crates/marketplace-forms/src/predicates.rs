//! Field predicates
//!
//! Pure string checks used by the contact form rules. Callers pass values that
//! are already trimmed.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum digit count for a phone number
pub const MIN_PHONE_DIGITS: usize = 7;

// Local part: dot-separated atoms or a quoted string.
// Domain: dotted labels ending in a 2+ letter label, or a bracketed dotted quad.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-z\-0-9]+\.)+[a-z]{2,}))$"#,
    )
    .unwrap()
});

// ASCII digits only; the pattern does not accept separators
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^[0-9]{{{},}}$", MIN_PHONE_DIGITS)).unwrap());

/// True when the value is empty after trimming whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates email format (case-insensitive)
///
/// # Examples
/// ```
/// use marketplace_forms::is_valid_email;
/// assert!(is_valid_email("jo@x.com"));
/// assert!(is_valid_email("Jo@Example.COM"));
/// assert!(!is_valid_email("foo"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(&email.to_lowercase())
}

/// Validates a phone number: digits only, at least [`MIN_PHONE_DIGITS`] of them
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
