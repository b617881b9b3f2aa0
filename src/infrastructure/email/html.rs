//! Email check matching the browser's `<input type="email">` constraint.

use crate::domain::email::EmailChecker;
use regex::Regex;
use std::sync::LazyLock;

/// The "valid email address" production from the HTML standard.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// Browser-equivalent email validity.
///
/// # Rules
///
/// 1. **Sanitization**: line breaks are removed, then leading and trailing
///    ASCII whitespace is stripped
/// 2. **Empty value**: valid unless the field is `required`
/// 3. **Otherwise**: must match the HTML "valid email address" pattern
///    (no quoted local parts, no IP literals, no Unicode domains)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlEmailChecker {
    required: bool,
}

impl HtmlEmailChecker {
    pub fn new(required: bool) -> Self {
        Self { required }
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    fn sanitize(value: &str) -> String {
        value
            .chars()
            .filter(|c| !matches!(c, '\n' | '\r'))
            .collect::<String>()
            .trim_matches(|c: char| c.is_ascii_whitespace())
            .to_string()
    }
}

impl Default for HtmlEmailChecker {
    /// The sign-up form marks its email input as `required`.
    fn default() -> Self {
        Self::new(true)
    }
}

impl EmailChecker for HtmlEmailChecker {
    fn is_valid_email(&self, value: &str) -> bool {
        let value = Self::sanitize(value);
        if value.is_empty() {
            return !self.required;
        }
        EMAIL_REGEX.is_match(&value)
    }
}
