//! Input format validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Usernames: 3-50 characters, no whitespace
static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s]{3,50}$").expect("username regex is valid"));

/// Check whether a username satisfies the format rules
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_RE.is_match(username)
}

/// Classify a login identifier as an email address.
///
/// A bare contains-test on `@`, not full address validation: login input is
/// resolved against the email column when it could plausibly be an email,
/// and usernames can never contain `@`.
pub fn looks_like_email(identifier: &str) -> bool {
    identifier.contains('@')
}

/// Minimum password length accepted at registration and reset
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Check whether a password satisfies the baseline length rule
pub fn is_valid_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LENGTH
}
