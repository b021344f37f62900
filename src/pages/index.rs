//! Index page generation listing every reference page

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::store::PageSummary;

/// Generates the site index
///
/// Lists every catalog page in catalog order, marking pages whose content
/// was edited or seeded in the store.
///
/// # Arguments
///
/// * `site_title`: Site name used as heading
/// * `pages`: Page summaries in display order
///
/// # Returns
///
/// Complete HTML document
pub fn generate(site_title: &str, pages: &[PageSummary]) -> Markup {
    page_wrapper(
        "Index",
        site_title,
        &["assets/site.css"],
        html! {
            header class="site-header" {
                h1 class="site-title" { (site_title) }
            }
            main {
                @if pages.is_empty() {
                    p class="empty-state" { "No pages" }
                } @else {
                    ul class="page-list" {
                        @for page in pages {
                            li class="page-entry" {
                                a href=(format!("pages/{}.html", page.id)) class="page-link" {
                                    (page.title)
                                }
                                @if page.has_content {
                                    span class="page-badge" { "stored" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
