//! HTML escaping for text content.

/// Replacement table, applied in order. `&` must come first so the entities
/// produced by later entries are not escaped again.
///
/// Quotes are left alone: the WeChat editor renders them fine but shows
/// `&quot;` literally.
const REPLACEMENTS: &[(char, &str)] = &[('&', "&amp;"), ('<', "&lt;"), ('>', "&gt;")];

/// Escapes `&`, `<` and `>` in `text`.
///
/// # Example
///
/// ```
/// assert_eq!(mdwx::escape_html("a & b < c > d"), "a &amp; b &lt; c &gt; d");
/// ```
pub fn escape_html(text: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(text.to_string(), |acc, (from, to)| {
            if acc.contains(*from) {
                acc.replace(*from, to)
            } else {
                acc
            }
        })
}
