//! Line classification.
//!
//! The classifier walks the body once, line by line. It is a two-state
//! machine: while **scanning**, each line is classified on its own; a `>` line
//! or a code fence switches it **into a run**, which keeps consuming lines
//! until the run ends and then hands control back to scanning.
//!
//! # Precedence
//!
//! While scanning, the first matching rule wins:
//!
//! 1. blank line (skipped)
//! 2. `### `, `## `, `# ` headings
//! 3. special titles (`12.5亿 - 年度营收`)
//! 4. `>` opens a blockquote run
//! 5. `---` / `***` / `___` divider
//! 6. `- `, `* `, `1. ` list items
//! 7. ```` ``` ```` opens a code run
//! 8. `![alt](url)` image
//! 9. `[label](url)` link
//! 10. paragraph
//!
//! A blockquote run ends at the first line that does not start with `>`,
//! including a blank line; a bare `>` line stays inside the run. A code run
//! ends at the next fence line, or at the end of input.

use crate::model::{Block, HeadingLevel, ListMarker};
use regex::Regex;
use std::sync::LazyLock;

const FENCE: &str = "```";

/// Separators a special title must contain.
const TITLE_SEPARATORS: &[&str] = &[" - ", " – ", " — "];

/// Bullet glyph that disqualifies a line from being a special title.
const TITLE_BULLET: char = '●';

// Number, optional magnitude unit with trailing non-space text, then a dash.
static RE_SPECIAL_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d.]+(?:[亿万千百][^\s]*)?\s*[-–—]").unwrap());

static RE_ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

static RE_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[([^\]]*)\]\(([^)]+)\)").unwrap());

static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Classifies a document body into blocks.
///
/// Surrounding whitespace of the body is trimmed first.
///
/// # Example
///
/// ```
/// use mdwx::{classify, Block};
///
/// let blocks = classify("# Title\n\n> first\n>\n> second");
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(
///     blocks[1],
///     Block::Blockquote { paragraphs: vec!["first".into(), "second".into()] }
/// );
/// ```
pub fn classify(body: &str) -> Vec<Block> {
    let mut classifier = Classifier::new();
    for line in body.trim().lines() {
        classifier.push_line(line);
    }
    classifier.finish()
}

/// Incremental line classifier.
#[derive(Debug, Default)]
pub struct Classifier {
    state: State,
    blocks: Vec<Block>,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Scanning,
    InRun(Run),
}

/// A multi-line construct being collected.
#[derive(Debug)]
enum Run {
    /// Quoted line contents with the `>` marker removed
    Quote(Vec<String>),
    /// Raw lines after the opening fence
    Code(Vec<String>),
}

/// Outcome of classifying one line while scanning.
#[derive(Debug, PartialEq)]
enum Step {
    Skip,
    Emit(Block),
    OpenQuote(String),
    OpenCode,
}

impl Classifier {
    /// Creates a classifier in the scanning state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a blockquote or code run is open.
    pub fn in_run(&self) -> bool {
        matches!(self.state, State::InRun(_))
    }

    /// Feeds the next line.
    pub fn push_line(&mut self, raw: &str) {
        match std::mem::take(&mut self.state) {
            State::Scanning => self.scan(raw),
            State::InRun(Run::Quote(mut lines)) => {
                let line = raw.trim_end();
                if line.starts_with('>') {
                    lines.push(strip_quote_marker(line).to_string());
                    self.state = State::InRun(Run::Quote(lines));
                } else {
                    self.close_quote(lines);
                    self.scan(raw);
                }
            }
            State::InRun(Run::Code(mut lines)) => {
                if raw.starts_with(FENCE) {
                    log::trace!("code run closed after {} lines", lines.len());
                    self.emit(Block::Code { lines });
                } else {
                    lines.push(raw.to_string());
                    self.state = State::InRun(Run::Code(lines));
                }
            }
        }
    }

    /// Closes any open run and returns the blocks.
    pub fn finish(mut self) -> Vec<Block> {
        match std::mem::take(&mut self.state) {
            State::Scanning => {}
            State::InRun(Run::Quote(lines)) => self.close_quote(lines),
            State::InRun(Run::Code(lines)) => {
                log::debug!("unterminated code run, {} lines to end of input", lines.len());
                self.emit(Block::Code { lines });
            }
        }
        self.blocks
    }

    fn scan(&mut self, raw: &str) {
        match scan_line(raw.trim_end()) {
            Step::Skip => {}
            Step::Emit(block) => self.emit(block),
            Step::OpenQuote(first) => self.state = State::InRun(Run::Quote(vec![first])),
            Step::OpenCode => self.state = State::InRun(Run::Code(Vec::new())),
        }
    }

    fn close_quote(&mut self, lines: Vec<String>) {
        // Every non-empty quoted line is its own paragraph; bare `>` markers
        // only separate them, so leading, trailing and repeated ones vanish.
        let paragraphs: Vec<String> = lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect();

        if paragraphs.is_empty() {
            log::debug!("blockquote run without content dropped");
            return;
        }
        self.emit(Block::Blockquote { paragraphs });
    }

    fn emit(&mut self, block: Block) {
        log::trace!("block {}: {}", self.blocks.len(), block.kind_name());
        self.blocks.push(block);
    }
}

/// Classifies a single right-trimmed line in the scanning state.
fn scan_line(line: &str) -> Step {
    if line.is_empty() {
        return Step::Skip;
    }

    if let Some(text) = line.strip_prefix("### ") {
        return Step::Emit(heading(HeadingLevel::H3, text));
    }
    if let Some(text) = line.strip_prefix("## ") {
        return Step::Emit(heading(HeadingLevel::H2, text));
    }
    if let Some(text) = line.strip_prefix("# ") {
        return Step::Emit(heading(HeadingLevel::H1, text));
    }

    if is_special_title(line) {
        return Step::Emit(Block::SpecialTitle {
            text: line.trim().to_string(),
        });
    }

    if line.starts_with('>') {
        return Step::OpenQuote(strip_quote_marker(line).to_string());
    }

    if matches!(line.trim(), "---" | "***" | "___") {
        return Step::Emit(Block::Divider);
    }

    if line.starts_with("- ") || line.starts_with("* ") {
        return Step::Emit(list_item(ListMarker::Bullet, line));
    }
    if RE_ORDERED_ITEM.is_match(line) {
        return Step::Emit(list_item(ListMarker::Ordered, line));
    }

    if line.starts_with(FENCE) {
        return Step::OpenCode;
    }

    if line.starts_with("![") {
        if let Some(caps) = RE_IMAGE.captures(line) {
            return Step::Emit(Block::Image {
                alt: caps[1].to_string(),
                url: caps[2].to_string(),
            });
        }
        log::debug!("malformed image line, rendering as paragraph: {line}");
    } else if line.starts_with('[') && line.contains("](") {
        if let Some(caps) = RE_LINK.captures(line) {
            return Step::Emit(Block::Link {
                label: caps[1].to_string(),
                url: caps[2].to_string(),
            });
        }
        log::debug!("malformed link line, rendering as paragraph: {line}");
    }

    Step::Emit(Block::Paragraph {
        text: line.to_string(),
    })
}

/// Returns true for numbered or statistic-style titles such as
/// `3. Market - overview` or `12.5亿 - 年度营收`.
pub fn is_special_title(line: &str) -> bool {
    let line = line.trim();
    TITLE_SEPARATORS.iter().any(|sep| line.contains(sep))
        && !line.contains(TITLE_BULLET)
        && RE_SPECIAL_TITLE.is_match(line)
}

/// Removes the quote marker: `> text` loses both characters, `>text` only
/// the `>`. A bare `>` yields an empty string.
fn strip_quote_marker(line: &str) -> &str {
    line.strip_prefix("> ")
        .or_else(|| line.strip_prefix('>'))
        .unwrap_or(line)
}

fn heading(level: HeadingLevel, text: &str) -> Block {
    Block::Heading {
        level,
        text: text.to_string(),
    }
}

fn list_item(marker: ListMarker, line: &str) -> Block {
    Block::ListItem {
        marker,
        text: line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(text: &str) -> Block {
        Block::Paragraph {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_blank_lines_skipped() {
        assert!(classify("").is_empty());
        assert!(classify("\n\n   \n").is_empty());
        assert_eq!(scan_line(""), Step::Skip);
    }

    #[test]
    fn test_headings() {
        let blocks = classify("# One\n## Two\n### Three");
        assert_eq!(
            blocks,
            vec![
                heading(HeadingLevel::H1, "One"),
                heading(HeadingLevel::H2, "Two"),
                heading(HeadingLevel::H3, "Three"),
            ]
        );
    }

    #[test]
    fn test_heading_needs_space() {
        assert_eq!(classify("#hashtag"), vec![paragraph("#hashtag")]);
        assert_eq!(classify("####  deep"), vec![paragraph("####  deep")]);
    }

    #[test]
    fn test_heading_before_special_title() {
        assert_eq!(
            classify("### - 2024 - Q1 Report"),
            vec![heading(HeadingLevel::H3, "- 2024 - Q1 Report")]
        );
    }

    #[test]
    fn test_special_title_patterns() {
        assert!(is_special_title("12.5亿 - 年度营收"));
        assert!(is_special_title("3 - Overview"));
        assert!(is_special_title("1.2 – 背景"));
        assert!(is_special_title("300万用户 — 增长"));
        assert!(is_special_title("  12 - padded  "));
    }

    #[test]
    fn test_special_title_rejections() {
        assert!(!is_special_title("● 12.5亿 - 年度营收"));
        assert!(!is_special_title("12.5亿 - 年度营收 ●"));
        assert!(!is_special_title("Revenue 12 - up"));
        assert!(!is_special_title("12-up"));
        assert!(!is_special_title("12亿元"));
    }

    #[test]
    fn test_special_title_block_trimmed() {
        assert_eq!(
            classify("12.5亿 - 年度营收"),
            vec![Block::SpecialTitle {
                text: "12.5亿 - 年度营收".into()
            }]
        );
    }

    #[test]
    fn test_bullet_line_is_not_special_title() {
        assert_eq!(
            classify("● 12.5亿 - 年度营收"),
            vec![paragraph("● 12.5亿 - 年度营收")]
        );
    }

    #[test]
    fn test_special_title_wins_over_ordered_list() {
        assert_eq!(
            classify("1. - first"),
            vec![Block::SpecialTitle {
                text: "1. - first".into()
            }]
        );
    }

    #[test]
    fn test_blockquote_paragraphs() {
        assert_eq!(
            classify("> first\n>\n> second"),
            vec![Block::Blockquote {
                paragraphs: vec!["first".into(), "second".into()]
            }]
        );
    }

    #[test]
    fn test_blockquote_markers_collapsed_and_trimmed() {
        assert_eq!(
            classify(">\n>\n> only\n>\n>"),
            vec![Block::Blockquote {
                paragraphs: vec!["only".into()]
            }]
        );
    }

    #[test]
    fn test_blockquote_without_space() {
        assert_eq!(
            classify(">tight\n>  two spaces"),
            vec![Block::Blockquote {
                paragraphs: vec!["tight".into(), " two spaces".into()]
            }]
        );
    }

    #[test]
    fn test_blockquote_ends_at_blank_line() {
        assert_eq!(
            classify("> one\n\n> two"),
            vec![
                Block::Blockquote {
                    paragraphs: vec!["one".into()]
                },
                Block::Blockquote {
                    paragraphs: vec!["two".into()]
                },
            ]
        );
    }

    #[test]
    fn test_blockquote_bare_marker_keeps_run_open() {
        assert_eq!(classify("> one\n>\n> two").len(), 1);
    }

    #[test]
    fn test_blockquote_ends_at_plain_line() {
        assert_eq!(
            classify("> quoted\nplain"),
            vec![
                Block::Blockquote {
                    paragraphs: vec!["quoted".into()]
                },
                paragraph("plain"),
            ]
        );
    }

    #[test]
    fn test_blockquote_of_markers_only_dropped() {
        assert!(classify(">\n>").is_empty());
    }

    #[test]
    fn test_dividers() {
        assert_eq!(
            classify("---\n***\n___"),
            vec![Block::Divider, Block::Divider, Block::Divider]
        );
        assert_eq!(classify("----"), vec![paragraph("----")]);
    }

    #[test]
    fn test_list_items() {
        assert_eq!(
            classify("- dash\n* star\n12. twelve"),
            vec![
                list_item(ListMarker::Bullet, "- dash"),
                list_item(ListMarker::Bullet, "* star"),
                list_item(ListMarker::Ordered, "12. twelve"),
            ]
        );
    }

    #[test]
    fn test_not_list_items() {
        assert_eq!(classify("-dash"), vec![paragraph("-dash")]);
        assert_eq!(classify("1.5 percent"), vec![paragraph("1.5 percent")]);
    }

    #[test]
    fn test_code_run() {
        assert_eq!(
            classify("```rust\nlet x = **1**;\n\n  indented  \n```\nafter"),
            vec![
                Block::Code {
                    lines: vec![
                        "let x = **1**;".into(),
                        "".into(),
                        "  indented  ".into()
                    ]
                },
                paragraph("after"),
            ]
        );
    }

    #[test]
    fn test_code_run_ignores_other_syntax() {
        assert_eq!(
            classify("```\n# not a heading\n> not a quote\n```"),
            vec![Block::Code {
                lines: vec!["# not a heading".into(), "> not a quote".into()]
            }]
        );
    }

    #[test]
    fn test_unterminated_code_run() {
        assert_eq!(
            classify("```\nline one\nline two"),
            vec![Block::Code {
                lines: vec!["line one".into(), "line two".into()]
            }]
        );
    }

    #[test]
    fn test_closing_fence_not_reopened() {
        assert_eq!(
            classify("```\na\n```\n```\nb\n```"),
            vec![
                Block::Code {
                    lines: vec!["a".into()]
                },
                Block::Code {
                    lines: vec!["b".into()]
                },
            ]
        );
    }

    #[test]
    fn test_image() {
        assert_eq!(
            classify("![alt](http://x/y.png)"),
            vec![Block::Image {
                alt: "alt".into(),
                url: "http://x/y.png".into()
            }]
        );
        assert_eq!(
            classify("![](pic.png)"),
            vec![Block::Image {
                alt: "".into(),
                url: "pic.png".into()
            }]
        );
    }

    #[test]
    fn test_malformed_image_falls_back() {
        assert_eq!(
            classify("![alt](http://x/y.png"),
            vec![paragraph("![alt](http://x/y.png")]
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            classify("[**Docs**](https://example.com)"),
            vec![Block::Link {
                label: "**Docs**".into(),
                url: "https://example.com".into()
            }]
        );
    }

    #[test]
    fn test_malformed_link_falls_back() {
        assert_eq!(classify("[](empty)"), vec![paragraph("[](empty)")]);
        assert_eq!(classify("[note] text"), vec![paragraph("[note] text")]);
    }

    #[test]
    fn test_lines_right_trimmed() {
        assert_eq!(classify("text   \t"), vec![paragraph("text")]);
    }

    #[test]
    fn test_body_trimmed() {
        assert_eq!(classify("\n\n   text\n\n"), vec![paragraph("text")]);
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(
            classify("# Title\r\n\r\nbody\r\n"),
            vec![heading(HeadingLevel::H1, "Title"), paragraph("body")]
        );
    }

    #[test]
    fn test_incremental_state() {
        let mut classifier = Classifier::new();
        assert!(!classifier.in_run());
        classifier.push_line("```");
        assert!(classifier.in_run());
        classifier.push_line("code");
        classifier.push_line("```");
        assert!(!classifier.in_run());
        classifier.push_line("> quote");
        assert!(classifier.in_run());
        classifier.push_line("");
        assert!(!classifier.in_run());
        assert_eq!(classifier.finish().len(), 2);
    }

    #[test]
    fn test_every_content_line_yields_one_block() {
        let body = "# h\n12 - t\n---\n- a\n1. b\n![i](u)\n[l](u)\ntext";
        assert_eq!(classify(body).len(), 8);
    }
}
