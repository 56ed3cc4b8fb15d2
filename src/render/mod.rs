//! HTML rendering for documents.

mod html;
mod options;
mod theme;

pub use html::HtmlRenderer;
pub use options::{OutputMode, RenderOptions, DEFAULT_LANG, DEFAULT_TITLE};
pub use theme::{load_theme, Theme};

use crate::error::Result;
use crate::model::{Block, Document};
use std::io::Write;

/// Renders a document to HTML.
pub fn render_html(document: &Document, options: &RenderOptions) -> String {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(document)
}

/// Renders blocks as newline-joined body fragments.
pub fn render_body(blocks: &[Block], theme: &Theme) -> String {
    let options = RenderOptions::default().with_theme(theme.clone());
    HtmlRenderer::new(options).render_blocks(blocks)
}

/// Renders a document to HTML and writes to a writer.
pub fn render_to_writer<W: Write>(
    document: &Document,
    writer: &mut W,
    options: &RenderOptions,
) -> Result<()> {
    let content = render_html(document, options);
    writer.write_all(content.as_bytes())?;
    Ok(())
}
