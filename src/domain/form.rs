//! Host capability traits for an observable HTML form.
//!
//! The validator never talks to a concrete page. It looks elements up,
//! reads values and toggles indicators through [`FormView`], and wires
//! its handlers through [`ObservableForm`].
//!
//! # Implementations
//!
//! - [`crate::infrastructure::page::HtmlPage`] - in-memory page with browser-like event dispatch

use crate::domain::entities::DisplayStyle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Element tag of a form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlTag {
    Input,
    Button,
    Select,
    Textarea,
}

impl fmt::Display for ControlTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ControlTag::Input => "input",
            ControlTag::Button => "button",
            ControlTag::Select => "select",
            ControlTag::Textarea => "textarea",
        };
        f.write_str(tag)
    }
}

/// The `type` attribute of a form control.
///
/// Unrecognised values deserialize to [`ControlType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlType {
    Text,
    Email,
    Url,
    Password,
    Hidden,
    Submit,
    Reset,
    Button,
    #[serde(other)]
    Other,
}

impl ControlType {
    /// Type a control gets when the attribute is absent.
    ///
    /// A `<button>` without a type is a submit button.
    pub fn default_for(tag: ControlTag) -> Self {
        match tag {
            ControlTag::Button => ControlType::Submit,
            _ => ControlType::Text,
        }
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ControlType::Text => "text",
            ControlType::Email => "email",
            ControlType::Url => "url",
            ControlType::Password => "password",
            ControlType::Hidden => "hidden",
            ControlType::Submit => "submit",
            ControlType::Reset => "reset",
            ControlType::Button => "button",
            ControlType::Other => "other",
        };
        f.write_str(kind)
    }
}

/// Attribute selector for a single control, e.g. `input[name="firstName"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlLocator {
    ByName { tag: ControlTag, name: String },
    ByType { tag: ControlTag, kind: ControlType },
}

impl ControlLocator {
    /// `input[name="<name>"]`
    pub fn input_named(name: impl Into<String>) -> Self {
        Self::ByName {
            tag: ControlTag::Input,
            name: name.into(),
        }
    }

    /// `input[type="<kind>"]`
    pub fn input_of_type(kind: ControlType) -> Self {
        Self::ByType {
            tag: ControlTag::Input,
            kind,
        }
    }

    /// `button[type="submit"]`
    pub fn submit_button() -> Self {
        Self::ByType {
            tag: ControlTag::Button,
            kind: ControlType::Submit,
        }
    }

    /// Returns true if a control with these attributes matches the selector.
    pub fn matches(&self, tag: ControlTag, kind: ControlType, name: Option<&str>) -> bool {
        match self {
            Self::ByName {
                tag: wanted,
                name: wanted_name,
            } => *wanted == tag && name == Some(wanted_name.as_str()),
            Self::ByType {
                tag: wanted,
                kind: wanted_kind,
            } => *wanted == tag && *wanted_kind == kind,
        }
    }
}

impl fmt::Display for ControlLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByName { tag, name } => write!(f, "{tag}[name=\"{name}\"]"),
            Self::ByType { tag, kind } => write!(f, "{tag}[type=\"{kind}\"]"),
        }
    }
}

/// Opaque reference to a control owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlHandle(usize);

impl ControlHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Opaque reference to an error indicator element owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndicatorHandle(usize);

impl IndicatorHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// What a submit listener wants done with the default submit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the form submit.
    Proceed,
    /// Prevent the default action: no navigation, nothing sent.
    Cancel,
}

/// Read/write access to the elements of a page.
pub trait FormView {
    /// Finds the first control in document order matching `locator`.
    fn locate_control(&self, locator: &ControlLocator) -> Option<ControlHandle>;

    /// Finds an indicator element by its `id`.
    fn locate_indicator(&self, id: &str) -> Option<IndicatorHandle>;

    /// Current value of a control.
    fn value(&self, control: ControlHandle) -> Option<&str>;

    /// Current display style of an indicator.
    fn display(&self, indicator: IndicatorHandle) -> Option<DisplayStyle>;

    /// Sets the display style of an indicator. Unknown handles are ignored.
    fn set_display(&mut self, indicator: IndicatorHandle, display: DisplayStyle);
}

/// Listener for the form's `submit` event.
pub type SubmitHandler = Box<dyn FnMut(&mut dyn FormView) -> SubmitDecision>;

/// Listener for `input` events on any control; receives the edited control.
pub type InputHandler = Box<dyn FnMut(&mut dyn FormView, ControlHandle)>;

/// A form that dispatches `submit` and `input` events to registered handlers.
///
/// Handlers run to completion one at a time on the caller's thread.
pub trait ObservableForm: FormView {
    /// Registers a `submit` listener.
    ///
    /// The default action is prevented when any listener returns
    /// [`SubmitDecision::Cancel`].
    fn on_submit(&mut self, handler: SubmitHandler);

    /// Registers an `input` listener on every control of the form.
    fn on_any_field_change(&mut self, handler: InputHandler);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_display_by_name() {
        let locator = ControlLocator::input_named("firstName");
        assert_eq!(locator.to_string(), r#"input[name="firstName"]"#);
    }

    #[test]
    fn test_locator_display_by_type() {
        assert_eq!(
            ControlLocator::input_of_type(ControlType::Email).to_string(),
            r#"input[type="email"]"#
        );
        assert_eq!(
            ControlLocator::submit_button().to_string(),
            r#"button[type="submit"]"#
        );
    }

    #[test]
    fn test_locator_matches_name_and_tag() {
        let locator = ControlLocator::input_named("lastName");

        assert!(locator.matches(ControlTag::Input, ControlType::Text, Some("lastName")));
        assert!(!locator.matches(ControlTag::Input, ControlType::Text, Some("firstName")));
        assert!(!locator.matches(ControlTag::Input, ControlType::Text, None));
        assert!(!locator.matches(ControlTag::Textarea, ControlType::Text, Some("lastName")));
    }

    #[test]
    fn test_locator_matches_type_and_tag() {
        let locator = ControlLocator::input_of_type(ControlType::Url);

        assert!(locator.matches(ControlTag::Input, ControlType::Url, Some("url")));
        assert!(locator.matches(ControlTag::Input, ControlType::Url, None));
        assert!(!locator.matches(ControlTag::Input, ControlType::Text, Some("url")));
    }

    #[test]
    fn test_button_defaults_to_submit() {
        assert_eq!(
            ControlType::default_for(ControlTag::Button),
            ControlType::Submit
        );
        assert_eq!(ControlType::default_for(ControlTag::Input), ControlType::Text);
    }

    #[test]
    fn test_unknown_control_type_deserializes_to_other() {
        let kind: ControlType = serde_json::from_str(r#""datetime-local""#).unwrap();
        assert_eq!(kind, ControlType::Other);
    }
}
