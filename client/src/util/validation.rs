//! Client-side format checks for signup credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signup rejects malformed usernames and passwords before any request is
//! sent. The server applies its own rules; these only gate the UI.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

/// Characters accepted as the mandatory "special" class of a password.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

static USERNAME_FORMAT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{5,20}$").ok());

// The `regex` crate has no lookahead, so the "contains at least one of each
// class" rule is split into one regex per class plus an overall shape check.
static PASSWORD_SHAPE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9!@#$%^&*]{8,16}$").ok());
static PASSWORD_LETTER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[A-Za-z]").ok());
static PASSWORD_DIGIT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[0-9]").ok());
static PASSWORD_SYMBOL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[!@#$%^&*]").ok());

fn matches(re: &LazyLock<Option<Regex>>, value: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(value))
}

/// Accepts 5-20 characters drawn from ASCII letters, digits, `_` and `-`.
pub fn validate_username(value: &str) -> bool {
    matches(&USERNAME_FORMAT, value)
}

/// Accepts 8-16 characters with at least one letter, one digit and one of
/// [`PASSWORD_SYMBOLS`], and nothing outside those three classes.
pub fn validate_password(value: &str) -> bool {
    matches(&PASSWORD_SHAPE, value)
        && matches(&PASSWORD_LETTER, value)
        && matches(&PASSWORD_DIGIT, value)
        && matches(&PASSWORD_SYMBOL, value)
}
