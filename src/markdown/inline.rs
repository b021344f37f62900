//! Inline formatting inside a single block.

use maud::html;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Marks a protected span inside a line while emphasis runs.
const PLACEHOLDER: char = '\u{1A}';

/// Link schemes allowed in `href`; anything else renders as plain text.
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

static SPAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"`([^`]+)`|\[([^\]]+)\]\(([^)]+)\)").expect("valid code span and link regex")
});
static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1A(\d+)\x1A").expect("valid placeholder regex"));
static BOLD_ITALIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").expect("valid bold italic regex"));
static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold regex"));
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("valid italic regex"));

/// Renders inline markup of one line to an HTML string.
///
/// Literal text is escaped first. Code spans and links are then rendered
/// and swapped for placeholders, so code content and URLs never receive
/// emphasis while emphasis around them still applies. `***` runs before
/// bold, and bold before italic, so a double asterisk is never read as
/// two italic delimiters. Unmatched delimiters stay in the output as
/// literal characters.
///
/// # Arguments
///
/// * `text`: Raw inline text of a heading, paragraph, call-out or item
///
/// # Returns
///
/// HTML string safe for direct injection
pub fn render_inline(text: &str) -> String {
    let escaped = escape(&text.replace(PLACEHOLDER, ""));
    format_escaped(&escaped)
}

fn format_escaped(escaped: &str) -> String {
    let mut spans: Vec<String> = Vec::new();
    let protected = SPAN_RE.replace_all(escaped, |caps: &Captures<'_>| {
        let html = match (caps.get(1), caps.get(2), caps.get(3)) {
            (Some(code), _, _) => format!("<code>{}</code>", code.as_str()),
            (None, Some(label), Some(url)) => link(label.as_str(), url.as_str()),
            _ => caps[0].to_string(),
        };
        spans.push(html);
        format!("{}{}{}", PLACEHOLDER, spans.len() - 1, PLACEHOLDER)
    });

    let emphasized = emphasis(&protected);
    PLACEHOLDER_RE
        .replace_all(&emphasized, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| spans.get(index))
                .cloned()
                .unwrap_or_default()
        })
        .into_owned()
}

fn link(label: &str, url: &str) -> String {
    let label = format_escaped(label);
    if is_safe_url(url) {
        format!("<a href=\"{}\">{}</a>", url, label)
    } else {
        label
    }
}

/// Returns true for relative URLs and the schemes in `SAFE_SCHEMES`.
///
/// Browsers ignore whitespace and control characters inside a scheme, so
/// they are dropped before the check.
fn is_safe_url(url: &str) -> bool {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();

    let Some(colon) = compact.find(':') else {
        return true;
    };
    let scheme = &compact[..colon];
    if scheme.contains(['/', '?', '#']) {
        return true;
    }

    SAFE_SCHEMES
        .iter()
        .any(|safe| scheme.eq_ignore_ascii_case(safe))
}

fn emphasis(text: &str) -> String {
    let strong_em = BOLD_ITALIC_RE.replace_all(text, "<strong><em>$1</em></strong>");
    let bold = BOLD_RE.replace_all(&strong_em, "<strong>$1</strong>");
    ITALIC_RE.replace_all(&bold, "<em>$1</em>").into_owned()
}

/// Escapes HTML significant characters through maud.
fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}
