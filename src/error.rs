//! Errors raised while wiring the validator into a page.
//!
//! Invalid field values are never errors: they surface through the error
//! indicators and a prevented submission.

use crate::domain::form::ControlLocator;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Form control not found: {locator}")]
    MissingControl { locator: ControlLocator },

    #[error("Error indicator not found: #{id}")]
    MissingIndicator { id: String },

    #[error("Unknown form control handle: {0}")]
    UnknownControl(usize),

    #[error("Invalid page layout: {0}")]
    InvalidLayout(#[from] serde_json::Error),
}

impl FormError {
    pub fn missing_control(locator: ControlLocator) -> Self {
        Self::MissingControl { locator }
    }

    pub fn missing_indicator(id: impl Into<String>) -> Self {
        Self::MissingIndicator { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_control_message() {
        let err = FormError::missing_control(ControlLocator::input_named("firstName"));
        assert_eq!(
            err.to_string(),
            r#"Form control not found: input[name="firstName"]"#
        );
    }

    #[test]
    fn test_missing_indicator_message() {
        let err = FormError::missing_indicator("error-message");
        assert_eq!(err.to_string(), "Error indicator not found: #error-message");
    }
}
