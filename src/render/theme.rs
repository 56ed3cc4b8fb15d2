//! Color palette used by the HTML templates.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Colors baked into the inline styles of every rendered fragment.
///
/// Deserializes from JSON with every field optional, so a theme file only
/// needs to list the colors it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Accent color: bold text, links, heading and quote rules.
    pub theme_color: String,
    /// Body text.
    pub text_color: String,
    /// Secondary text (blockquotes).
    pub text_light: String,
    /// h1/h2 and code block text.
    pub heading_color: String,
    /// Dividers and borders.
    pub border_color: String,
    /// Blockquote, code block and inline code background.
    pub quote_background: String,
    /// Inline code text.
    pub code_color: String,
    /// Page background of the full document.
    pub page_background: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            theme_color: "#2563eb".to_string(),
            text_color: "#374151".to_string(),
            text_light: "#6b7280".to_string(),
            heading_color: "#111827".to_string(),
            border_color: "#e5e7eb".to_string(),
            quote_background: "#f9fafb".to_string(),
            code_color: "#1f293b".to_string(),
            page_background: "#ffffff".to_string(),
        }
    }
}

impl Theme {
    /// Creates the built-in palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a theme from JSON. Missing fields keep their default.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Theme(e.to_string()))
    }

    /// Sets the accent color.
    pub fn with_theme_color(mut self, color: impl Into<String>) -> Self {
        self.theme_color = color.into();
        self
    }
}

/// Loads a JSON theme file.
pub fn load_theme(path: impl AsRef<Path>) -> Result<Theme> {
    let json = std::fs::read_to_string(path)?;
    Theme::from_json_str(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let theme = Theme::default();
        assert_eq!(theme.theme_color, "#2563eb");
        assert_eq!(theme.text_color, "#374151");
        assert_eq!(theme.text_light, "#6b7280");
        assert_eq!(theme.border_color, "#e5e7eb");
        assert_eq!(theme.quote_background, "#f9fafb");
    }

    #[test]
    fn test_partial_json_overrides() {
        let theme = Theme::from_json_str(r##"{"theme_color": "#c2410c"}"##).unwrap();
        assert_eq!(theme.theme_color, "#c2410c");
        assert_eq!(theme.text_color, Theme::default().text_color);
    }

    #[test]
    fn test_invalid_json() {
        let err = Theme::from_json_str("not json").unwrap_err();
        assert!(matches!(err, Error::Theme(_)));
    }

    #[test]
    fn test_load_theme_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, r##"{"border_color": "#000000"}"##).unwrap();

        let theme = load_theme(&path).unwrap();
        assert_eq!(theme.border_color, "#000000");
    }

    #[test]
    fn test_load_missing_theme_file() {
        let err = load_theme("/nonexistent/theme.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
