//! Navigation breadcrumb component

use maud::{Markup, html};

/// Renders breadcrumb navigation
///
/// Shows the site title as a link back to the page index followed by the
/// current page title, matching the `site > page` trail of the reference
/// pages.
///
/// # Arguments
///
/// * `site_title`: Site name for the root breadcrumb link
/// * `index_path`: Relative path back to index.html
/// * `current`: Title of the page being viewed
///
/// # Returns
///
/// Breadcrumb navigation markup
pub fn breadcrumb(site_title: &str, index_path: &str, current: &str) -> Markup {
    html! {
        div class="breadcrumb" {
            a href=(index_path) class="breadcrumb-link" { (site_title) }
            span class="breadcrumb-separator" { " > " }
            span class="breadcrumb-current" { (current) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadcrumb_links_to_index() {
        // Arrange & Act
        let html = breadcrumb("SwiftUI リファレンス", "../index.html", "ビュー").into_string();

        // Assert
        assert!(html.contains("<a href=\"../index.html\" class=\"breadcrumb-link\">SwiftUI リファレンス</a>"));
        assert!(html.contains("&gt;"), "Separator should be escaped: {}", html);
        assert!(html.contains("<span class=\"breadcrumb-current\">ビュー</span>"));
    }
}
