// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Notification email address validation.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Check whether `candidate` looks like `local@domain.tld`.
///
/// Accepts any non-whitespace local part and domain as long as there is exactly one `@`
/// and the domain contains at least one `.` with text on both sides. Looser than RFC 5322.
///
/// # Examples
///
/// ```rust,ignore
/// assert!(opsdeck::models::email::is_valid_email("a@b.com"));
/// assert!(!opsdeck::models::email::is_valid_email("a@b"));
/// ```
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_compiles() {
        assert!(EMAIL_PATTERN.is_some());
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(is_valid_email("x@y.z"));
    }

    #[test]
    fn rejects_missing_tld() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.com"));
    }

    #[test]
    fn rejects_whitespace_anywhere() {
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(" a@b.com"));
        assert!(!is_valid_email("a@b.com "));
        assert!(!is_valid_email("a@b\t.com"));
    }

    #[test]
    fn rejects_empty_segments_and_extra_at() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }
}
