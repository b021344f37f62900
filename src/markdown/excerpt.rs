//! Plain text excerpts for article cards.

use once_cell::sync::Lazy;
use regex::Regex;

/// Excerpt length used when an article is saved without one.
pub const DEFAULT_EXCERPT_CHARS: usize = 200;

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Derives a short plain text excerpt from article content.
///
/// Strips HTML tags, keeps the first `max_chars` characters and appends
/// `...` when anything was cut. Counts characters, not bytes, so
/// multi-byte text is never split inside a code point.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let plain = HTML_TAG_RE.replace_all(content, "");
    let mut result: String = plain.chars().take(max_chars).collect();
    if plain.chars().nth(max_chars).is_some() {
        result.push_str("...");
    }
    result
}
