//! Email check backed by the `validator` crate.

use crate::domain::email::EmailChecker;
use validator::ValidateEmail;

/// Email validity using [`validator::ValidateEmail`].
///
/// Stricter than the browser rule in places (e.g. label lengths, local-part
/// length) and more permissive in others (quoted local parts, IP literals).
/// Surrounding whitespace is trimmed; an empty value is invalid.
#[derive(Debug, Clone, Copy, Default)]
pub struct RfcEmailChecker;

impl EmailChecker for RfcEmailChecker {
    fn is_valid_email(&self, value: &str) -> bool {
        let trimmed = value.trim().to_string();
        !trimmed.is_empty() && trimmed.validate_email()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(RfcEmailChecker.is_valid_email("jane@example.com"));
        assert!(RfcEmailChecker.is_valid_email(" jane.doe@example.co.uk "));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!RfcEmailChecker.is_valid_email(""));
        assert!(!RfcEmailChecker.is_valid_email("notanemail"));
        assert!(!RfcEmailChecker.is_valid_email("jane@"));
        assert!(!RfcEmailChecker.is_valid_email("@example.com"));
    }
}
