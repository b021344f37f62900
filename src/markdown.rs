//! Markdown subset rendering for articles and reference pages.
//!
//! This module converts the restricted markdown dialect used by the
//! editor (headings, emphasis, inline code, fenced code, call-outs, lists
//! and links) into HTML fragments. Source text is tokenized line by line
//! into blocks, reconciled in separate passes, and rendered with maud so
//! that literal text is always escaped.

mod block;
mod excerpt;
mod inline;
mod renderer;

pub use block::{Block, CalloutKind, ListItem, ListMarker, parse_blocks, tokenize};
pub use excerpt::{DEFAULT_EXCERPT_CHARS, excerpt};
pub use inline::render_inline;
pub use renderer::{MarkdownRenderer, render};
