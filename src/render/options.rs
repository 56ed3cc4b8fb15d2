//! Rendering options for HTML output.

use super::Theme;

/// Title used when the frontmatter has none.
pub const DEFAULT_TITLE: &str = "微信公众号文章";

/// Default `lang` attribute of the document shell.
pub const DEFAULT_LANG: &str = "zh-CN";

/// Options for HTML rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Color palette for the inline styles.
    pub theme: Theme,

    /// Full HTML document or body fragments only.
    pub output_mode: OutputMode,

    /// `<title>` when the document has no `title` metadata.
    /// Default: "微信公众号文章"
    pub fallback_title: String,

    /// `lang` attribute of the `<html>` element.
    /// Default: "zh-CN"
    pub lang: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            output_mode: OutputMode::Document,
            fallback_title: DEFAULT_TITLE.to_string(),
            lang: DEFAULT_LANG.to_string(),
        }
    }
}

impl RenderOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color palette.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Renders only the body fragments, without the document shell.
    pub fn body_only(mut self) -> Self {
        self.output_mode = OutputMode::BodyOnly;
        self
    }

    /// Sets the title used when the document has none.
    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }

    /// Sets the `lang` attribute.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

/// What the renderer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Complete HTML5 document.
    #[default]
    Document,
    /// Newline-joined body fragments for embedding.
    BodyOnly,
}
