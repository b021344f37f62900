//! HTML site generators for reference page content.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::write_css_assets;
use crate::markdown::MarkdownRenderer;
use crate::pages;
use crate::store::{ContentStore, PageLibrary};

/// Directory below the output root holding one file per reference page.
const PAGES_DIR: &str = "pages";

/// File name of the admin preview document.
const PREVIEW_FILE: &str = "preview.html";

/// Files written by a site generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteReport {
    pub index: PathBuf,
    pub pages: Vec<PathBuf>,
}

/// Generates the static reference site.
///
/// Writes `index.html`, `pages/<id>.html` for every catalog page and the
/// CSS assets. Pages without stored content are seeded with their default
/// content through the library.
///
/// # Arguments
///
/// * `library`: Page library over the content store
/// * `output`: Output directory, created when missing
/// * `site_title`: Site name for titles and breadcrumbs
///
/// # Returns
///
/// Paths of the generated documents
///
/// # Errors
///
/// Returns error if content cannot be loaded or files cannot be written
///
/// # Examples
///
/// ```no_run
/// use certstudy::{FileStore, PageLibrary, generate_site};
/// use std::path::Path;
///
/// let mut library = PageLibrary::new(FileStore::new("content"));
/// let report = generate_site(&mut library, Path::new("dist"), "SwiftUI リファレンス")?;
/// println!("{}", report.index.display());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_site<S: ContentStore>(
    library: &mut PageLibrary<S>,
    output: &Path,
    site_title: &str,
) -> Result<SiteReport> {
    let pages_dir = output.join(PAGES_DIR);
    fs::create_dir_all(&pages_dir)
        .with_context(|| format!("Failed to create pages directory: {}", pages_dir.display()))?;
    write_css_assets(&output.join("assets")).context("Failed to write CSS assets")?;

    let catalog = *library.catalog();
    let mut written = Vec::with_capacity(catalog.pages().len());

    for page in catalog.pages() {
        let content_html = library
            .render(page.id)
            .with_context(|| format!("Failed to render page {}", page.id))?;
        let markup = pages::reference::generate(site_title, page.title, &content_html);

        let path = pages_dir.join(format!("{}.html", page.id));
        fs::write(&path, markup.into_string())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Generated {}", path.display());
        written.push(path);
    }

    let summaries = library.summaries().context("Failed to list pages")?;
    let index = output.join("index.html");
    fs::write(&index, pages::index::generate(site_title, &summaries).into_string())
        .with_context(|| format!("Failed to write {}", index.display()))?;

    info!(
        "Generated {} reference pages in {}",
        written.len(),
        output.display()
    );

    Ok(SiteReport {
        index,
        pages: written,
    })
}

/// Renders a draft file into a standalone preview document.
///
/// # Errors
///
/// Returns error if the draft cannot be read or the preview written
pub fn generate_preview(source: &Path, output: &Path) -> Result<PathBuf> {
    let content_html = MarkdownRenderer::new()
        .render_file(source)
        .context("Failed to render preview source")?;

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;
    let path = output.join(PREVIEW_FILE);
    fs::write(&path, pages::preview::generate(&content_html).into_string())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Generated preview {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_generate_site_writes_every_page() {
        // Arrange
        let temp = TempDir::new().expect("temp dir");
        let mut library = PageLibrary::new(MemoryStore::new());

        // Act
        let report = generate_site(&mut library, temp.path(), "Site").expect("generate");

        // Assert
        assert_eq!(report.pages.len(), 12);
        assert!(report.index.exists());
        assert!(temp.path().join("pages/home.html").exists());
        assert!(temp.path().join("assets/markdown.css").exists());
    }

    #[test]
    fn test_generate_site_uses_stored_content() {
        // Arrange
        let temp = TempDir::new().expect("temp dir");
        let mut library = PageLibrary::new(MemoryStore::new());
        library
            .save("gestures", "# Tap\n\n* one\n* two")
            .expect("save");

        // Act
        generate_site(&mut library, temp.path(), "Site").expect("generate");

        // Assert
        let html = fs::read_to_string(temp.path().join("pages/gestures.html")).expect("read");
        assert!(html.contains("<h1>Tap</h1>"));
        assert!(html.contains("<ul><li>one</li><li>two</li></ul>"));
    }

    #[test]
    fn test_generate_site_seeds_defaults() {
        // Arrange
        let temp = TempDir::new().expect("temp dir");
        let mut library = PageLibrary::new(MemoryStore::new());

        // Act
        generate_site(&mut library, temp.path(), "Site").expect("generate");

        // Assert
        let summaries = library.summaries().expect("summaries");
        assert!(summaries.iter().all(|s| s.has_content));
        let index = fs::read_to_string(temp.path().join("index.html")).expect("read");
        assert_eq!(index.matches("page-badge").count(), 12);
    }

    #[test]
    fn test_generate_preview() {
        // Arrange
        let temp = TempDir::new().expect("temp dir");
        let source = temp.path().join("draft.md");
        fs::write(&source, "# Draft\n\n```swift\nText(\"x\")\n```").expect("write draft");

        // Act
        let path = generate_preview(&source, &temp.path().join("out")).expect("preview");

        // Assert
        let html = fs::read_to_string(path).expect("read preview");
        assert!(html.contains("<h1>Draft</h1>"));
        assert!(html.contains("code-header\">Swift"));
    }

    #[test]
    fn test_generate_preview_missing_source() {
        // Arrange
        let temp = TempDir::new().expect("temp dir");

        // Act
        let result = generate_preview(&temp.path().join("nope.md"), temp.path());

        // Assert
        assert!(result.is_err());
    }
}
