//! Markdown reference pages and community relationship rules for a study
//! platform.

mod assets;
mod catalog;
pub mod components;
mod config;
mod generators;
mod logging;
mod markdown;
pub mod pages;
mod relation;
mod social;
mod store;

pub use assets::write_css_assets;
pub use catalog::{PageCatalog, PageDef};
pub use config::{Config, DEFAULT_SITE_TITLE, PageImport};
pub use generators::{SiteReport, generate_preview, generate_site};
pub use logging::{init_logging, normalize_level};
pub use markdown::{
    Block, CalloutKind, DEFAULT_EXCERPT_CHARS, ListItem, ListMarker, MarkdownRenderer, excerpt,
    parse_blocks, render, render_inline, tokenize,
};
pub use relation::{RelationError, RelationshipSet, toggle};
pub use social::{FollowOutcome, LikeOutcome, Profile, toggle_follow, toggle_like, total_likes};
pub use store::{ContentStore, FileStore, MemoryStore, PageLibrary, PageSummary, StoreError};
