//! Frontmatter detection.
//!
//! A frontmatter block is only recognized when the very first line is `---`
//! and another `---` line follows somewhere later in the document.

use crate::model::Metadata;

const DELIMITER: &str = "---";

/// Splits `text` into frontmatter metadata and the remaining body.
///
/// Without a valid frontmatter block the metadata is empty and the body is
/// the whole input.
///
/// # Example
///
/// ```
/// let (metadata, body) = mdwx::split_frontmatter("---\ntitle: \"Q1 Report\"\n---\nBody text");
/// assert_eq!(metadata.title(), Some("Q1 Report"));
/// assert_eq!(body, "Body text");
/// ```
pub fn split_frontmatter(text: &str) -> (Metadata, String) {
    let lines: Vec<&str> = text.split('\n').collect();

    if lines.len() < 3 || !is_delimiter(lines[0]) {
        return (Metadata::new(), text.to_string());
    }

    match lines[1..].iter().position(|line| is_delimiter(line)) {
        Some(offset) => {
            let close = offset + 1;
            let metadata = Metadata::from_lines(lines[1..close].iter().copied());
            let body = lines[close + 1..].join("\n");
            log::trace!("frontmatter spans lines 0..={close}");
            (metadata, body)
        }
        None => (Metadata::new(), text.to_string()),
    }
}

// CRLF input leaves a trailing '\r' on each line.
fn is_delimiter(line: &str) -> bool {
    line.strip_suffix('\r').unwrap_or(line) == DELIMITER
}
