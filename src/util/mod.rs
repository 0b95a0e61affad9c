//! Small utility helpers for encoding, JSON extraction, ranking, and time
//! formatting.
//!
//! The functions in this module are intentionally lightweight so they can be
//! used freely by networking, rendering, and CLI code.

pub mod html;

pub use html::{excerpt, html_to_text};

use serde_json::Value;
use std::fmt::Write;

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters as per RFC 3986 (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`).
/// - All other bytes are encoded as two uppercase hexadecimal digits prefixed by `%`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Extract a string value from a JSON object by key, defaulting to empty string.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up in the JSON object.
///
/// Output:
/// - Returns the string value if found, or an empty string if the key is missing or not a string.
#[must_use]
pub fn s(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// What: Extract an optional string value from a JSON object by key.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up.
///
/// Output:
/// - `Some(String)` when the key maps to a non-empty JSON string; `None` otherwise.
///
/// Details:
/// - JSON `null` and empty strings both normalize to `None`, which is what the
///   optional `image` field needs.
#[must_use]
pub fn opt_s(v: &Value, key: &str) -> Option<String> {
    v.get(key)
        .and_then(Value::as_str)
        .filter(|x| !x.is_empty())
        .map(ToOwned::to_owned)
}

/// What: Rank a candidate string against a query with fzf-style fuzzy matching.
///
/// Inputs:
/// - `candidate`: Text to score.
/// - `query`: Typed query text.
/// - `matcher`: Reference to a `SkimMatcherV2` instance to reuse across calls.
///
/// Output:
/// - `Some(score)` when the candidate matches (higher is better); `None` otherwise.
#[must_use]
pub fn fuzzy_rank(
    candidate: &str,
    query: &str,
    matcher: &fuzzy_matcher::skim::SkimMatcherV2,
) -> Option<i64> {
    use fuzzy_matcher::FuzzyMatcher;
    matcher.fuzzy_match(candidate, query)
}

/// What: Format an ISO-8601 timestamp for display as `Mon DD, YYYY`.
///
/// Inputs:
/// - `iso`: Timestamp string as the API reports it (e.g., `2025-06-01T09:30:00Z`).
///
/// Output:
/// - Human-readable date, or the raw input when parsing fails.
///
/// Details:
/// - Accepts both offset-carrying and naive datetime strings; the date part is
///   all that is displayed, so offsets are not normalized.
#[must_use]
pub fn display_date(iso: &str) -> String {
    use chrono::{DateTime, NaiveDateTime};
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return dt.format("%b %e, %Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%b %e, %Y").to_string();
    }
    iso.to_owned()
}
