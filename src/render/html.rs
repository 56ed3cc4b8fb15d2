//! HTML renderer implementation.

use super::{OutputMode, RenderOptions, Theme};
use crate::escape::escape_html;
use crate::inline::InlineFormatter;
use crate::model::{Block, Document, HeadingLevel};

const MONO_FONTS: &str = "'SF Mono', 'Fira Code', monospace";

/// HTML renderer. Every block kind maps to exactly one template.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    options: RenderOptions,
    inline: InlineFormatter,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl HtmlRenderer {
    /// Creates a new renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        let inline = InlineFormatter::new(&options.theme);
        Self { options, inline }
    }

    /// Renders a document according to the output mode.
    pub fn render(&self, document: &Document) -> String {
        let body = self.render_blocks(&document.blocks);
        match self.options.output_mode {
            OutputMode::Document => self.render_shell(document.title(), &body),
            OutputMode::BodyOnly => body,
        }
    }

    /// Renders blocks as newline-joined fragments.
    pub fn render_blocks(&self, blocks: &[Block]) -> String {
        blocks
            .iter()
            .map(|block| self.render_block(block))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders one block.
    pub fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Heading { level, text } => self.heading(*level, text),
            Block::SpecialTitle { text } => self.heading(HeadingLevel::H2, text),
            Block::Blockquote { paragraphs } => self.blockquote(paragraphs),
            Block::Divider => self.divider(),
            Block::ListItem { text, .. } => self.list_item(text),
            Block::Code { lines } => self.code(lines),
            Block::Image { alt, url } => self.image(alt, url),
            Block::Link { label, url } => self.link(label, url),
            Block::Paragraph { text } => self.paragraph(text),
        }
    }

    fn theme(&self) -> &Theme {
        &self.options.theme
    }

    fn heading(&self, level: HeadingLevel, text: &str) -> String {
        let t = self.theme();
        let text = escape_html(text);
        match level {
            HeadingLevel::H1 => format!(
                "<h1 style=\"margin: 24px 0 16px; font-size: 24px; font-weight: bold; color: {}; \
                 text-align: center; padding-bottom: 12px; border-bottom: 1px solid {};\">{text}</h1>",
                t.heading_color, t.border_color
            ),
            HeadingLevel::H2 => format!(
                "<h2 style=\"margin: 28px 0 16px; font-size: 20px; font-weight: 600; color: {}; \
                 text-align: center;\">{text}</h2>",
                t.heading_color
            ),
            HeadingLevel::H3 => format!(
                "<h3 style=\"margin: 24px 0 12px; font-size: 17px; font-weight: 600; color: {}; \
                 padding-left: 12px; border-left: 3px solid {};\">{text}</h3>",
                t.text_color, t.theme_color
            ),
        }
    }

    fn blockquote(&self, paragraphs: &[String]) -> String {
        let t = self.theme();
        let inner = if let [single] = paragraphs {
            format!(
                "<p style=\"margin: 0; font-size: 15px; line-height: 1.8; color: {};\">{}</p>",
                t.text_light,
                self.inline.format(single)
            )
        } else {
            paragraphs
                .iter()
                .map(|para| {
                    format!(
                        "<p style=\"margin: 8px 0; font-size: 15px; line-height: 1.8; color: {};\">{}</p>",
                        t.text_light,
                        self.inline.format(para.trim())
                    )
                })
                .collect::<String>()
        };
        format!(
            "<blockquote style=\"margin: 16px 0; padding: 12px 16px; background: {}; \
             border-left: 3px solid {};\">\n    {inner}\n</blockquote>",
            t.quote_background, t.theme_color
        )
    }

    fn divider(&self) -> String {
        format!(
            "<hr style=\"border: none; border-top: 1px solid {}; margin: 24px 0;\">",
            self.theme().border_color
        )
    }

    fn paragraph(&self, text: &str) -> String {
        format!(
            "<p style=\"margin: 16px 0; font-size: 16px; line-height: 1.8; color: {};\">{}</p>",
            self.theme().text_color,
            self.inline.format(text)
        )
    }

    fn list_item(&self, text: &str) -> String {
        format!(
            "<p style=\"margin: 8px 0; padding-left: 24px; text-indent: -24px; font-size: 16px; \
             line-height: 1.8; color: {};\">{}</p>",
            self.theme().text_color,
            self.inline.format(text)
        )
    }

    fn code(&self, lines: &[String]) -> String {
        let t = self.theme();
        let content = lines
            .iter()
            .map(|line| escape_html(line))
            .collect::<Vec<_>>()
            .join("<br>");
        format!(
            "<pre style=\"margin: 16px 0; padding: 14px 16px; background: {}; \
             border: 1px solid {}; border-radius: 6px; overflow-x: auto; \
             white-space: pre-wrap; word-break: break-word; font-family: {MONO_FONTS}; \
             font-size: 13px; line-height: 1.7; color: {};\">{content}</pre>",
            t.quote_background, t.border_color, t.heading_color
        )
    }

    // Single-quoted attributes; quotes inside alt and url are not escaped.
    fn image(&self, alt: &str, url: &str) -> String {
        format!(
            "<figure style='margin: 20px 0; text-align: center;'><img src='{}' alt='{}' \
             style='max-width: 100%; height: auto; border-radius: 6px;'></figure>",
            escape_html(url),
            escape_html(alt)
        )
    }

    fn link(&self, label: &str, url: &str) -> String {
        let t = self.theme();
        format!(
            "<p style='margin: 8px 0; font-size: 16px; line-height: 1.8; color: {};'>\
             <a href='{}' style='color: {}; text-decoration: none;'>{}</a></p>",
            t.text_color,
            escape_html(url),
            t.theme_color,
            self.inline.format(label)
        )
    }

    fn render_shell(&self, title: Option<&str>, body: &str) -> String {
        let title = match title {
            Some(title) => title,
            None => {
                log::debug!("no title in metadata, using fallback");
                self.options.fallback_title.as_str()
            }
        };
        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no">
    <title>{title}</title>
</head>
<body style="margin: 0; padding: 16px; background-color: {background};">
    <div style="max-width: 100%; margin: 0 auto;">
        {body}
    </div>
</body>
</html>"#,
            lang = escape_html(&self.options.lang),
            title = escape_html(title),
            background = self.theme().page_background,
        )
    }
}
