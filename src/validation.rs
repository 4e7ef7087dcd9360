//! Pure input predicates for the login form.
//!
//! No side effects; the reducer is the only caller.

use std::sync::LazyLock;

use regex::Regex;

/// Standard email-address shape: bounded local part, `@`, one or more
/// dotted domain labels.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9+._%\-]{1,256}@[A-Za-z0-9][A-Za-z0-9\-]{0,64}(\.[A-Za-z0-9][A-Za-z0-9\-]{0,25})+$",
    )
    .expect("email pattern is valid")
});

/// True iff `s` has at least one non-whitespace character.
pub fn is_non_blank(s: &str) -> bool {
    s.chars().any(|c| !c.is_whitespace())
}

pub fn is_valid_email(s: &str) -> bool {
    EMAIL_PATTERN.is_match(s)
}

/// Passwords only need a minimum length of 6; content is unrestricted.
pub fn is_valid_password(s: &str) -> bool {
    s.chars().count() >= 6
}
