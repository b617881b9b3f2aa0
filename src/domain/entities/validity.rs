//! Outcome of one validity check.

use super::FieldKind;

/// Per-field result of evaluating the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidityReport {
    pub first_name: bool,
    pub last_name: bool,
    pub email: bool,
    pub url: bool,
}

impl ValidityReport {
    pub fn field(&self, kind: FieldKind) -> bool {
        match kind {
            FieldKind::FirstName => self.first_name,
            FieldKind::LastName => self.last_name,
            FieldKind::Email => self.email,
            FieldKind::Url => self.url,
        }
    }

    /// True when every field is valid.
    pub fn is_valid(&self) -> bool {
        self.first_name && self.last_name && self.email && self.url
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = FieldKind> + '_ {
        FieldKind::ALL
            .into_iter()
            .filter(move |kind| !self.field(*kind))
    }
}
