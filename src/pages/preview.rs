//! Standalone preview document for editor drafts

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline styles of the preview window; it must render without assets.
const PREVIEW_STYLE: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, sans-serif; padding: 20px; max-width: 800px; margin: 0 auto; }
h1 { color: #3776ab; border-bottom: 2px solid #e2e8f0; padding-bottom: 0.5rem; }
h2 { color: #3776ab; margin-top: 2rem; }
code { background: #f8f9fa; padding: 2px 4px; border-radius: 4px; }
pre { background: #f8f9fa; padding: 1rem; border-radius: 8px; overflow-x: auto; }
blockquote { background: #e7f3ff; border-left: 4px solid #3776ab; padding: 1rem; margin: 1rem 0; }
";

/// Generates a self contained preview of a rendered draft
///
/// # Arguments
///
/// * `content_html`: Rendered markdown fragment, injected verbatim
///
/// # Returns
///
/// Complete HTML document with inline styles
pub fn generate(content_html: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                meta charset="utf-8";
                title { "プレビュー" }
                style { (PreEscaped(PREVIEW_STYLE)) }
            }
            body {
                (PreEscaped(content_html))
            }
        }
    }
}
