//! The four validated fields of the sign-up form.

use crate::domain::form::{ControlLocator, ControlType};
use std::fmt;

/// A field checked by the validator, together with its markup contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    FirstName,
    LastName,
    Email,
    Url,
}

impl FieldKind {
    /// All fields in the order they appear on the page.
    pub const ALL: [FieldKind; 4] = [
        FieldKind::FirstName,
        FieldKind::LastName,
        FieldKind::Email,
        FieldKind::Url,
    ];

    /// Selector of the control holding this field's value.
    pub fn locator(self) -> ControlLocator {
        match self {
            FieldKind::FirstName => ControlLocator::input_named("firstName"),
            FieldKind::LastName => ControlLocator::input_named("lastName"),
            FieldKind::Email => ControlLocator::input_of_type(ControlType::Email),
            FieldKind::Url => ControlLocator::input_of_type(ControlType::Url),
        }
    }

    /// `id` of the element showing this field's error text.
    pub fn indicator_id(self) -> &'static str {
        match self {
            FieldKind::FirstName => "first-name-error-message",
            FieldKind::LastName => "last-name-error-message",
            FieldKind::Email => "email-error-message",
            FieldKind::Url => "error-message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::FirstName => "first name",
            FieldKind::LastName => "last name",
            FieldKind::Email => "email",
            FieldKind::Url => "product URL",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_indicator_ids_are_distinct() {
        let ids: HashSet<_> = FieldKind::ALL.iter().map(|f| f.indicator_id()).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_url_indicator_keeps_generic_id() {
        assert_eq!(FieldKind::Url.indicator_id(), "error-message");
    }

    #[test]
    fn test_email_and_url_are_located_by_type() {
        assert_eq!(
            FieldKind::Email.locator(),
            ControlLocator::input_of_type(ControlType::Email)
        );
        assert_eq!(
            FieldKind::Url.locator(),
            ControlLocator::input_of_type(ControlType::Url)
        );
    }
}
