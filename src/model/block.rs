//! Classified block types.

use serde::Serialize;

/// A block-level content element.
///
/// Text fields hold the raw Markdown text of the block; escaping and inline
/// formatting are applied by the renderer according to the block kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// An explicit `#`, `##` or `###` heading
    Heading { level: HeadingLevel, text: String },
    /// A numbered or statistic-style line promoted to a level 2 heading
    SpecialTitle { text: String },
    /// A run of `>` lines, one entry per non-empty quoted line
    Blockquote { paragraphs: Vec<String> },
    /// A `---`, `***` or `___` line
    Divider,
    /// A single-line list item; `text` keeps the list marker
    ListItem { marker: ListMarker, text: String },
    /// A fenced code run, lines kept verbatim
    Code { lines: Vec<String> },
    /// `![alt](url)`
    Image { alt: String, url: String },
    /// `[label](url)`
    Link { label: String, url: String },
    /// Anything else
    Paragraph { text: String },
}

impl Block {
    /// Returns a short name for the block kind, used in log output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::SpecialTitle { .. } => "special_title",
            Block::Blockquote { .. } => "blockquote",
            Block::Divider => "divider",
            Block::ListItem { .. } => "list_item",
            Block::Code { .. } => "code",
            Block::Image { .. } => "image",
            Block::Link { .. } => "link",
            Block::Paragraph { .. } => "paragraph",
        }
    }

    /// Returns true for blocks rendered as headings (including special titles).
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. } | Block::SpecialTitle { .. })
    }
}

/// Heading level for explicit `#` headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Returns the numeric level (1-3).
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// List marker style. Both render the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMarker {
    /// `- ` or `* `
    Bullet,
    /// `1. `
    Ordered,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Block::Divider.kind_name(), "divider");
        assert_eq!(
            Block::SpecialTitle {
                text: "1 - a".into()
            }
            .kind_name(),
            "special_title"
        );
    }

    #[test]
    fn test_is_heading() {
        let heading = Block::Heading {
            level: HeadingLevel::H3,
            text: "x".into(),
        };
        assert!(heading.is_heading());
        assert!(Block::SpecialTitle { text: "x".into() }.is_heading());
        assert!(!Block::Paragraph { text: "x".into() }.is_heading());
    }

    #[test]
    fn test_serialize_tagged() {
        let block = Block::ListItem {
            marker: ListMarker::Ordered,
            text: "1. item".into(),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["kind"], "list_item");
        assert_eq!(json["marker"], "ordered");
        assert_eq!(json["text"], "1. item");
    }

    #[test]
    fn test_heading_level_numbers() {
        assert_eq!(HeadingLevel::H1.as_u8(), 1);
        assert_eq!(HeadingLevel::H3.as_u8(), 3);
    }
}
