//! HTML rendering of parsed blocks.

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, Render, html};
use std::path::Path;

use super::block::{Block, CalloutKind, ListItem, parse_blocks};
use super::inline::render_inline;

/// Header shown above fenced blocks tagged `swift`.
const SWIFT_HEADER: &str = "Swift";

/// Header shown above every other fenced block.
const CODE_HEADER: &str = "コード例";

const WARNING_TITLE: &str = "\u{26A0}\u{FE0F} 注意";
const TIP_TITLE: &str = "\u{1F4A1} ヒント";

/// Renders the markdown subset to an HTML fragment.
///
/// Total over every input: malformed constructs degrade to literal text
/// and never produce an error.
///
/// # Arguments
///
/// * `source`: Markdown subset text
///
/// # Returns
///
/// HTML fragment with one element per block, separated by newlines
pub fn render(source: &str) -> String {
    parse_blocks(source)
        .iter()
        .map(|block| block.render().into_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renderer for article bodies and reference pages.
///
/// Holds no state; exists so callers can pass a renderer around and read
/// files through the same entry point.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Creates renderer.
    pub fn new() -> Self {
        Self
    }

    /// Renders markdown content to HTML string.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML fragment
    pub fn render(&self, content: &str) -> String {
        render(content)
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or is not valid UTF8
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.render(&content))
    }
}

fn inline(text: &str) -> PreEscaped<String> {
    PreEscaped(render_inline(text))
}

fn code_example(header: &str, code: &str) -> Markup {
    html! {
        div class="code-example" {
            div class="code-header" { (header) }
            div class="code-content" {
                pre { code { (code) } }
            }
        }
    }
}

impl Render for ListItem {
    fn render(&self) -> Markup {
        html! { li { (inline(&self.display_text())) } }
    }
}

impl Render for Block {
    fn render(&self) -> Markup {
        match self {
            Block::Heading { level, text } => match *level {
                1 => html! { h1 { (inline(text)) } },
                2 => html! { h2 { (inline(text)) } },
                3 => html! { h3 { (inline(text)) } },
                _ => html! { h4 { (inline(text)) } },
            },
            Block::Paragraph { text } | Block::Text { text } => html! { p { (inline(text)) } },
            Block::CodeBlock { code, .. } => {
                let header = if self.is_swift_code() {
                    SWIFT_HEADER
                } else {
                    CODE_HEADER
                };
                code_example(header, code)
            }
            Block::Callout { kind, body } => match kind {
                CalloutKind::Note { title } => html! {
                    div class="note" {
                        div class="note-title" { (inline(title)) }
                        p { (inline(body)) }
                    }
                },
                CalloutKind::Warning => html! {
                    div class="warning" {
                        div class="warning-title" { (WARNING_TITLE) }
                        p { (inline(body)) }
                    }
                },
                CalloutKind::Tip => html! {
                    div class="note" {
                        div class="note-title" { (TIP_TITLE) }
                        p { (inline(body)) }
                    }
                },
            },
            Block::Quote { text } => html! { blockquote { (inline(text)) } },
            Block::ListItem(item) => html! { ul { (item) } },
            Block::List(items) => html! {
                ul {
                    @for item in items {
                        (item)
                    }
                }
            },
            Block::Blank => html! {},
        }
    }
}
