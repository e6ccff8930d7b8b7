//! Limits and format rules shared by the client draft and the relay.
use std::sync::LazyLock;

use regex::Regex;

pub const NAME_MAX: usize = 200;
pub const EMAIL_MAX: usize = 254;
pub const MESSAGE_MAX: usize = 5000;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Simplified `local@domain.tld` check, applied to the trimmed value.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Length as the user sees it: characters, not bytes.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("  jane@example.com  "));
        assert!(is_valid_email("first.last+tag@sub.example.co.jp"));
    }

    #[test]
    fn test_email_rejects() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("abc"), 3);
        assert_eq!(char_len("ありがとう"), 5);
    }
}
