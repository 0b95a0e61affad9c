//! Plain-text extraction from stored rich-text (HTML) post bodies.
//!
//! Post content arrives from the API as HTML markup. The UI never renders
//! markup; list rows show short excerpts and the detail view shows the whole
//! body as wrapped text. Both go through [`html_to_text`], a pure function
//! with no terminal or network dependency.

use scraper::Html;

/// What: Convert an HTML fragment into plain text.
///
/// Inputs:
/// - `html`: Stored rich-text markup (may be empty or not actually HTML).
///
/// Output:
/// - Concatenated text content with runs of whitespace collapsed to single
///   spaces and no leading/trailing whitespace.
///
/// Details:
/// - Plain text without any tags passes through unchanged.
/// - Tags, attributes, and HTML comments never appear in the output.
#[must_use]
pub fn html_to_text(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();
    for piece in fragment.root_element().text() {
        for word in piece.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
    }
    out
}

/// What: Build a short plain-text excerpt from an HTML body.
///
/// Inputs:
/// - `html`: Stored rich-text markup.
/// - `max_chars`: Maximum number of characters to keep.
///
/// Output:
/// - Up to `max_chars` characters of extracted text, with a trailing ellipsis
///   when the text was truncated.
///
/// Details:
/// - Truncation counts `char`s, not bytes, so multi-byte text is never split
///   mid-character.
#[must_use]
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let text = html_to_text(html);
    if text.chars().count() <= max_chars {
        return text;
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}
