//! Document structure and metadata.

use super::Block;
use crate::classify::classify;
use crate::frontmatter::split_frontmatter;
use serde::Serialize;

/// A Markdown document split into metadata and classified blocks.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    /// Frontmatter metadata (empty when the document has none)
    pub metadata: Metadata,
    /// Body blocks in document order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Parses a full document: optional frontmatter, then the body.
    ///
    /// Never fails; malformed constructs degrade to plain paragraphs.
    pub fn parse(text: &str) -> Self {
        let (metadata, body) = split_frontmatter(text);
        let blocks = classify(&body);
        log::debug!(
            "parsed document: {} metadata entries, {} blocks",
            metadata.len(),
            blocks.len()
        );
        Self { metadata, blocks }
    }

    /// Returns the document title from the metadata, if any.
    pub fn title(&self) -> Option<&str> {
        self.metadata.title()
    }

    /// Returns the number of blocks rendered as headings.
    pub fn heading_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_heading()).count()
    }
}

/// Frontmatter metadata: `key: value` pairs in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    entries: Vec<(String, String)>,
}

impl Metadata {
    /// Creates empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses frontmatter lines. Lines without a `:` are ignored.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut metadata = Self::new();
        for line in lines {
            if let Some((key, value)) = line.split_once(':') {
                let key = key.trim();
                if !key.is_empty() {
                    metadata.insert(key, unquote(value.trim()));
                }
            }
        }
        metadata
    }

    /// Appends an entry. A later entry for the same key shadows earlier ones.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the non-empty `title` value.
    pub fn title(&self) -> Option<&str> {
        self.get("title").filter(|t| !t.is_empty())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strips one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
