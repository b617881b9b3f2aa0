//! Declarative page markup used to build an [`HtmlPage`](super::HtmlPage).

use crate::domain::entities::{DisplayStyle, FieldKind};
use crate::domain::form::{ControlTag, ControlType};
use crate::error::FormError;
use serde::{Deserialize, Serialize};

/// The form controls and error indicators of a page, in document order.
///
/// # Example JSON
///
/// ```json
/// {
///   "controls": [
///     { "tag": "input", "type": "text", "name": "firstName" },
///     { "tag": "input", "type": "email", "name": "email", "value": "jane@example.com" },
///     { "tag": "button" }
///   ],
///   "indicators": [
///     { "id": "first-name-error-message" },
///     { "id": "email-error-message", "display": "block" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageLayout {
    #[serde(default)]
    pub controls: Vec<ControlSpec>,
    #[serde(default)]
    pub indicators: Vec<IndicatorSpec>,
}

/// One control inside the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSpec {
    pub tag: ControlTag,
    /// `type` attribute; defaults per tag when absent.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ControlType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub value: String,
}

impl ControlSpec {
    pub fn input(kind: ControlType, name: impl Into<String>) -> Self {
        Self {
            tag: ControlTag::Input,
            kind: Some(kind),
            name: Some(name.into()),
            value: String::new(),
        }
    }

    pub fn submit_button() -> Self {
        Self {
            tag: ControlTag::Button,
            kind: Some(ControlType::Submit),
            name: None,
            value: String::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// The `type` the control behaves as.
    pub fn effective_kind(&self) -> ControlType {
        self.kind.unwrap_or_else(|| ControlType::default_for(self.tag))
    }
}

/// An element outside the form that shows a field's error text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSpec {
    pub id: String,
    #[serde(default)]
    pub display: DisplayStyle,
}

impl IndicatorSpec {
    pub fn hidden(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display: DisplayStyle::None,
        }
    }
}

impl PageLayout {
    /// Parses a layout from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidLayout`] if the JSON does not describe a layout.
    pub fn from_json(raw: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Markup of the product sign-up page: four inputs, a submit button and
    /// four hidden error indicators.
    pub fn signup_form() -> Self {
        Self {
            controls: vec![
                ControlSpec::input(ControlType::Text, "firstName"),
                ControlSpec::input(ControlType::Text, "lastName"),
                ControlSpec::input(ControlType::Email, "email"),
                ControlSpec::input(ControlType::Url, "url"),
                ControlSpec::submit_button(),
            ],
            indicators: FieldKind::ALL
                .iter()
                .map(|field| IndicatorSpec::hidden(field.indicator_id()))
                .collect(),
        }
    }

    /// Removes every indicator with the given id.
    pub fn without_indicator(mut self, id: &str) -> Self {
        self.indicators.retain(|indicator| indicator.id != id);
        self
    }

    /// Removes every control whose `name` is `name`.
    pub fn without_control_named(mut self, name: &str) -> Self {
        self.controls
            .retain(|control| control.name.as_deref() != Some(name));
        self
    }
}
