//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Common validation functions
pub mod validators {
    use super::EMAIL_REGEX;

    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if an email address is syntactically valid
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(!is_valid_email("alice@"));
        assert!(!is_valid_email("alice.example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty("x"));
        assert!(!not_empty("   "));
    }
}
