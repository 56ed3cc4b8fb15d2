//! Inline formatting: escaping, inline code and bold.
//!
//! Formatting is a fixed list of text-to-text steps applied in order:
//!
//! 1. **Escape** - `&`, `<`, `>` become entities
//! 2. **Code** - `` `code` `` becomes a styled `<code>` span
//! 3. **Bold** - `**bold**` and `__bold__` become a styled `<strong>` span
//!
//! Later steps see the escaped text, so spans produced by the code step are
//! never escaped again. Nested or overlapping delimiters are not supported;
//! whatever the patterns match is what gets replaced.

use crate::escape::escape_html;
use crate::render::Theme;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

static RE_BOLD_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

static RE_BOLD_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([^_]+)__").unwrap());

/// A single inline formatting step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStep {
    /// HTML-escape the text
    Escape,
    /// Replace backtick spans with `<code>`
    Code,
    /// Replace `**`/`__` spans with `<strong>`
    Bold,
}

/// The order the steps run in.
pub const INLINE_STEPS: [InlineStep; 3] = [InlineStep::Escape, InlineStep::Code, InlineStep::Bold];

/// Applies [`INLINE_STEPS`] with the span styles of a theme.
#[derive(Debug, Clone)]
pub struct InlineFormatter {
    code_open: String,
    strong_open: String,
}

impl Default for InlineFormatter {
    fn default() -> Self {
        Self::new(&Theme::default())
    }
}

impl InlineFormatter {
    /// Creates a formatter using the colors of `theme`.
    pub fn new(theme: &Theme) -> Self {
        Self {
            code_open: format!(
                "<code style=\"background: {}; padding: 2px 6px; border-radius: 4px; \
                 font-family: 'SF Mono', 'Fira Code', monospace; font-size: 13px; color: {};\">",
                theme.quote_background, theme.code_color
            ),
            strong_open: format!(
                "<strong style=\"color: {}; font-weight: 600;\">",
                theme.theme_color
            ),
        }
    }

    /// Formats raw text into HTML-safe inline markup.
    pub fn format(&self, text: &str) -> String {
        INLINE_STEPS
            .iter()
            .fold(text.to_string(), |acc, step| self.apply(*step, &acc))
    }

    /// Runs one step. `Code` and `Bold` expect already escaped input.
    pub fn apply(&self, step: InlineStep, text: &str) -> String {
        match step {
            InlineStep::Escape => escape_html(text),
            InlineStep::Code => wrap_matches(&RE_INLINE_CODE, text, &self.code_open, "</code>"),
            InlineStep::Bold => {
                let text = wrap_matches(&RE_BOLD_STARS, text, &self.strong_open, "</strong>");
                wrap_matches(&RE_BOLD_UNDERSCORES, &text, &self.strong_open, "</strong>")
            }
        }
    }
}

/// Formats `text` with the default theme.
///
/// # Example
///
/// ```
/// let html = mdwx::format_inline("a < b **bold**");
/// assert!(html.starts_with("a &lt; b <strong"));
/// assert!(html.ends_with(">bold</strong>"));
/// ```
pub fn format_inline(text: &str) -> String {
    InlineFormatter::default().format(text)
}

// The closure keeps `$` in theme strings from being read as group references.
fn wrap_matches(re: &Regex, text: &str, open: &str, close: &str) -> String {
    re.replace_all(text, |caps: &Captures| format!("{open}{}{close}", &caps[1]))
        .into_owned()
}
