//! Paragraph markup cleanup for debunking text.

/// Opening paragraph tag.
pub const PARAGRAPH_OPEN: &str = "<p>";
/// Closing paragraph tag.
pub const PARAGRAPH_CLOSE: &str = "</p>";

/// Remove every literal `<p>` and `</p>` from `text`.
///
/// Nothing else is touched: entities stay encoded and whitespace is kept as is.
/// Removal repeats until no tag is left, so a tag that only forms once an
/// inner tag is removed (`<</p>p>`) does not survive.
pub fn strip_paragraphs(text: &str) -> String {
    let mut cleaned = text.replace(PARAGRAPH_OPEN, "").replace(PARAGRAPH_CLOSE, "");
    while cleaned.contains(PARAGRAPH_OPEN) || cleaned.contains(PARAGRAPH_CLOSE) {
        cleaned = cleaned.replace(PARAGRAPH_OPEN, "").replace(PARAGRAPH_CLOSE, "");
    }
    cleaned
}
