//! # mdwx
//!
//! Converts a constrained subset of Markdown into HTML with inline styles,
//! ready to paste into the WeChat official-account article editor.
//!
//! The conversion is a single pass over the lines of the document: each line
//! (or run of quoted / fenced lines) is classified into a block, and each block
//! is rendered through one fixed template. It never fails; anything that does
//! not match a construct is rendered as a plain paragraph.
//!
//! ## Quick Start
//!
//! ```
//! let html = mdwx::to_html("---\ntitle: Weekly\n---\n# Hello\n\nSome **bold** text.");
//! assert!(html.contains("<title>Weekly</title>"));
//! assert!(html.contains("<strong"));
//! ```
//!
//! ## Supported Markdown
//!
//! - `#`, `##`, `###` headings, plus numbered titles like `12.5亿 - 年度营收`
//! - `>` blockquotes, `>` alone separating paragraphs
//! - `---` / `***` / `___` dividers
//! - single-line `-`, `*` and `1.` list items
//! - fenced code blocks
//! - `![alt](url)` images and `[label](url)` links on their own line
//! - inline `` `code` ``, `**bold**` and `__bold__`
//!
//! ## Features
//!
//! - `async`: Async file conversion with Tokio

pub mod classify;
pub mod error;
pub mod escape;
pub mod frontmatter;
pub mod inline;
pub mod model;
pub mod render;

#[cfg(feature = "async")]
pub mod async_api;

// Re-exports
pub use classify::{classify, Classifier};
pub use error::{Error, Result};
pub use escape::escape_html;
pub use frontmatter::split_frontmatter;
pub use inline::{format_inline, InlineFormatter};
pub use model::{Block, Document, Metadata};
pub use render::{load_theme, OutputMode, RenderOptions, Theme};

use std::path::Path;

/// Parses a document into metadata and blocks.
pub fn parse(text: &str) -> Document {
    Document::parse(text)
}

/// Converts Markdown to a complete HTML document.
pub fn to_html(text: &str) -> String {
    to_html_with_options(text, &RenderOptions::default())
}

/// Converts Markdown to body fragments only, without the document shell.
///
/// Frontmatter is still removed from the output.
///
/// # Example
///
/// ```
/// let body = mdwx::to_html_body("---\ntitle: T\n---\n---");
/// assert!(body.starts_with("<hr "));
/// ```
pub fn to_html_body(text: &str) -> String {
    to_html_with_options(text, &RenderOptions::default().body_only())
}

/// Converts Markdown with custom options.
pub fn to_html_with_options(text: &str, options: &RenderOptions) -> String {
    render::render_html(&Document::parse(text), options)
}

/// Reads a Markdown file and converts it to a complete HTML document.
///
/// # Example
///
/// ```no_run
/// let html = mdwx::convert_file("article.md")?;
/// std::fs::write("article.html", html)?;
/// # Ok::<(), mdwx::Error>(())
/// ```
pub fn convert_file(path: impl AsRef<Path>) -> Result<String> {
    convert_file_with_options(path, &RenderOptions::default())
}

/// Reads a Markdown file and converts it with custom options.
pub fn convert_file_with_options(path: impl AsRef<Path>, options: &RenderOptions) -> Result<String> {
    let text = read_input(path.as_ref())?;
    Ok(to_html_with_options(&text, options))
}

/// Returns the sibling `.html` path for an input file: same directory,
/// same stem.
///
/// # Example
///
/// ```
/// use std::path::Path;
///
/// let out = mdwx::html_output_path("posts/weekly.md");
/// assert_eq!(out, Path::new("posts/weekly.html"));
/// ```
pub fn html_output_path(input: impl AsRef<Path>) -> std::path::PathBuf {
    input.as_ref().with_extension("html")
}

fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Builder for parsing and rendering documents.
///
/// # Example
///
/// ```
/// use mdwx::{Mdwx, Theme};
///
/// let html = Mdwx::new()
///     .with_theme(Theme::default().with_theme_color("#c2410c"))
///     .body_only()
///     .parse_str("**hot**")
///     .to_html();
/// assert!(html.contains("#c2410c"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mdwx {
    render_options: RenderOptions,
}

impl Mdwx {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color palette.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.render_options.theme = theme;
        self
    }

    /// Renders body fragments only.
    pub fn body_only(mut self) -> Self {
        self.render_options = self.render_options.body_only();
        self
    }

    /// Sets the title used when the document has none.
    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.render_options.fallback_title = title.into();
        self
    }

    /// Parses Markdown text.
    pub fn parse_str(self, text: &str) -> ParsedDocument {
        ParsedDocument {
            document: Document::parse(text),
            render_options: self.render_options,
        }
    }

    /// Parses a Markdown file.
    pub fn parse_file(self, path: impl AsRef<Path>) -> Result<ParsedDocument> {
        let text = read_input(path.as_ref())?;
        Ok(self.parse_str(&text))
    }
}

/// A parsed document ready for rendering.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    document: Document,
    render_options: RenderOptions,
}

impl ParsedDocument {
    /// Returns a reference to the underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Renders the document to HTML.
    pub fn to_html(&self) -> String {
        render::render_html(&self.document, &self.render_options)
    }

    /// Returns the classified blocks as pretty-printed JSON.
    pub fn blocks_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document.blocks)?)
    }

    /// Returns the number of blocks in the document.
    pub fn block_count(&self) -> usize {
        self.document.blocks.len()
    }

    /// Consumes self and returns the underlying document.
    pub fn into_document(self) -> Document {
        self.document
    }
}
