//! Pluggable email format check.

/// Decides whether an email field value is acceptable.
///
/// Stands in for the browser's built-in `type="email"` constraint so the
/// validator can run against hosts that have no such check.
///
/// # Implementations
///
/// - [`crate::infrastructure::email::HtmlEmailChecker`] - HTML "valid email address" rule
/// - [`crate::infrastructure::email::RfcEmailChecker`] - `validator` crate rule
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait EmailChecker {
    /// Returns true if `value` is a valid email field value.
    fn is_valid_email(&self, value: &str) -> bool;
}

impl<T: EmailChecker + ?Sized> EmailChecker for Box<T> {
    fn is_valid_email(&self, value: &str) -> bool {
        (**self).is_valid_email(value)
    }
}
