//! Error indicator visibility.

use serde::{Deserialize, Serialize};
use std::fmt;

/// CSS `display` value of an error indicator element.
///
/// Serializes as the CSS keyword (`"none"` / `"block"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// Hidden.
    #[default]
    None,
    /// Shown.
    Block,
}

impl DisplayStyle {
    /// `Block` for an invalid field, `None` for a valid one.
    pub fn for_validity(valid: bool) -> Self {
        if valid {
            DisplayStyle::None
        } else {
            DisplayStyle::Block
        }
    }

    pub fn is_shown(self) -> bool {
        self == DisplayStyle::Block
    }

    pub fn as_css(self) -> &'static str {
        match self {
            DisplayStyle::None => "none",
            DisplayStyle::Block => "block",
        }
    }
}

impl fmt::Display for DisplayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_validity() {
        assert_eq!(DisplayStyle::for_validity(true), DisplayStyle::None);
        assert_eq!(DisplayStyle::for_validity(false), DisplayStyle::Block);
    }

    #[test]
    fn test_default_is_hidden() {
        assert!(!DisplayStyle::default().is_shown());
    }

    #[test]
    fn test_serializes_as_css_keyword() {
        assert_eq!(
            serde_json::to_string(&DisplayStyle::Block).unwrap(),
            r#""block""#
        );
        let parsed: DisplayStyle = serde_json::from_str(r#""none""#).unwrap();
        assert_eq!(parsed, DisplayStyle::None);
    }
}
