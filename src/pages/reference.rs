//! Reference page generation for rendered markdown content

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::breadcrumb;

/// Generates HTML page for one reference page
///
/// Reference pages live at `pages/<id>.html`, one level below the site
/// root, so asset and index links are prefixed with `../`.
///
/// # Arguments
///
/// * `site_title`: Site name for title and breadcrumb
/// * `page_title`: Title of the reference page
/// * `content_html`: Rendered markdown fragment, injected verbatim
///
/// # Returns
///
/// Complete HTML document
pub fn generate(site_title: &str, page_title: &str, content_html: &str) -> Markup {
    page_wrapper(
        page_title,
        site_title,
        &["../assets/site.css", "../assets/markdown.css"],
        html! {
            div class="content" {
                (breadcrumb(site_title, "../index.html", page_title))
                div class="markdown-content" {
                    (PreEscaped(content_html))
                }
            }
        },
    )
}
