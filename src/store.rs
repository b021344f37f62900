//! Content storage for admin edited reference pages.
//!
//! Pages live behind the `ContentStore` trait so callers inject either an
//! in-memory map or a directory of markdown files. `PageLibrary` layers the
//! page catalog on top: it loads defaults on a miss, persists every write,
//! and refuses ids the catalog does not know.

use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::{PageCatalog, PageDef};
use crate::markdown::MarkdownRenderer;

/// File extension of stored page bodies.
const PAGE_EXTENSION: &str = "md";

/// Failures a caller may want to tell apart from I/O errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("page not found: {0}")]
    UnknownPage(String),
    #[error("content is required for page: {0}")]
    EmptyContent(String),
    #[error("invalid page id: {0:?}")]
    InvalidId(String),
}

/// Key value storage of page bodies.
pub trait ContentStore {
    /// Returns stored content, `None` when nothing was stored yet.
    fn get(&self, id: &str) -> Result<Option<String>>;

    /// Stores content, replacing any previous value.
    fn put(&mut self, id: &str, content: &str) -> Result<()>;

    fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.get(id)?.is_some())
    }
}

/// Process local store, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pages: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentStore for MemoryStore {
    fn get(&self, id: &str) -> Result<Option<String>> {
        Ok(self.pages.get(id).cloned())
    }

    fn put(&mut self, id: &str, content: &str) -> Result<()> {
        self.pages.insert(id.to_string(), content.to_string());
        Ok(())
    }

    fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.pages.contains_key(id))
    }
}

/// Directory backed store keeping one `<id>.md` file per page.
///
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file path for a page id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidId` unless the id is non-empty and made of
    /// ASCII letters, digits, `-` and `_`
    pub fn page_path(&self, id: &str) -> Result<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidId(id.to_string()).into());
        }
        Ok(self.root.join(format!("{}.{}", id, PAGE_EXTENSION)))
    }
}

impl ContentStore for FileStore {
    fn get(&self, id: &str) -> Result<Option<String>> {
        let path = self.page_path(id)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read page content: {}", path.display()))?;
        Ok(Some(content))
    }

    fn put(&mut self, id: &str, content: &str) -> Result<()> {
        let path = self.page_path(id)?;
        fs::create_dir_all(&self.root).with_context(|| {
            format!("Failed to create content directory: {}", self.root.display())
        })?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write page content: {}", path.display()))?;
        Ok(())
    }

    fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.page_path(id)?.exists())
    }
}

/// Listing entry for the page index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub id: &'static str,
    pub title: &'static str,
    /// Whether the store holds content for the page.
    pub has_content: bool,
}

/// Catalog aware access to page content.
pub struct PageLibrary<S: ContentStore> {
    store: S,
    catalog: PageCatalog,
    renderer: MarkdownRenderer,
}

impl<S: ContentStore> PageLibrary<S> {
    /// Creates library over the builtin page catalog.
    pub fn new(store: S) -> Self {
        Self::with_catalog(store, PageCatalog::builtin())
    }

    pub fn with_catalog(store: S, catalog: PageCatalog) -> Self {
        Self {
            store,
            catalog,
            renderer: MarkdownRenderer::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &PageCatalog {
        &self.catalog
    }

    /// Looks up page definition.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownPage` for ids outside the catalog
    pub fn page(&self, id: &str) -> Result<&'static PageDef> {
        self.catalog
            .find(id)
            .ok_or_else(|| StoreError::UnknownPage(id.to_string()).into())
    }

    /// Returns page content, seeding the store with the default on a miss.
    ///
    /// # Errors
    ///
    /// Returns error for unknown pages or when the store fails
    pub fn load(&mut self, id: &str) -> Result<String> {
        let page = self.page(id)?;

        if let Some(content) = self.store.get(page.id)? {
            return Ok(content);
        }

        debug!("Seeding default content for page {}", page.id);
        let content = self.catalog.default_content(page.id);
        self.store
            .put(page.id, &content)
            .with_context(|| format!("Failed to store default content for {}", page.id))?;
        Ok(content)
    }

    /// Replaces page content.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownPage` for unknown ids,
    /// `StoreError::EmptyContent` for empty content, or the store error
    pub fn save(&mut self, id: &str, content: &str) -> Result<()> {
        let page = self.page(id)?;
        if content.is_empty() {
            return Err(StoreError::EmptyContent(page.id.to_string()).into());
        }

        self.store.put(page.id, content)?;
        info!("Updated page {} ({} bytes)", page.id, content.len());
        Ok(())
    }

    /// Lists every catalog page with its storage state.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be queried
    pub fn summaries(&self) -> Result<Vec<PageSummary>> {
        self.catalog
            .pages()
            .iter()
            .map(|page| -> Result<PageSummary> {
                Ok(PageSummary {
                    id: page.id,
                    title: page.title,
                    has_content: self.store.contains(page.id)?,
                })
            })
            .collect()
    }

    /// Loads page content and renders it to an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns error when loading fails
    pub fn render(&mut self, id: &str) -> Result<String> {
        let content = self.load(id)?;
        Ok(self.renderer.render(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_error(err: &anyhow::Error) -> Option<&StoreError> {
        err.downcast_ref::<StoreError>()
    }

    #[test]
    fn test_memory_store_roundtrip() {
        // Arrange
        let mut store = MemoryStore::new();

        // Act
        store.put("home", "# Home").expect("put");

        // Assert
        assert_eq!(store.get("home").expect("get"), Some("# Home".to_string()));
        assert!(store.contains("home").expect("contains"));
        assert!(!store.contains("views").expect("contains"));
    }

    #[test]
    fn test_file_store_creates_directory_on_write() {
        // Arrange
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path().join("content");
        let mut store = FileStore::new(&root);

        // Act
        let before = store.get("home").expect("get");
        store.put("home", "# Home").expect("put");

        // Assert
        assert_eq!(before, None);
        assert!(root.join("home.md").exists());
        assert_eq!(store.get("home").expect("get"), Some("# Home".to_string()));
    }

    #[test]
    fn test_file_store_rejects_path_like_ids() {
        // Arrange
        let temp = TempDir::new().expect("temp dir");
        let store = FileStore::new(temp.path());

        for id in ["", "../escape", "a/b", "a.b"] {
            // Act
            let err = store.get(id).expect_err("invalid id should fail");

            // Assert
            assert_eq!(
                store_error(&err),
                Some(&StoreError::InvalidId(id.to_string()))
            );
        }
    }

    #[test]
    fn test_load_seeds_default_on_miss() {
        // Arrange
        let mut library = PageLibrary::new(MemoryStore::new());

        // Act
        let content = library.load("views").expect("load");

        // Assert
        assert!(content.starts_with("# ビュー"));
        assert_eq!(
            library.store().get("views").expect("get"),
            Some(content),
            "Default should be persisted"
        );
    }

    #[test]
    fn test_load_prefers_stored_content() {
        // Arrange
        let mut store = MemoryStore::new();
        store.put("home", "# Custom").expect("put");
        let mut library = PageLibrary::new(store);

        // Act
        let content = library.load("home").expect("load");

        // Assert
        assert_eq!(content, "# Custom");
    }

    #[test]
    fn test_load_unknown_page() {
        // Arrange
        let mut library = PageLibrary::new(MemoryStore::new());

        // Act
        let err = library.load("missing").expect_err("unknown page");

        // Assert
        assert_eq!(
            store_error(&err),
            Some(&StoreError::UnknownPage("missing".to_string()))
        );
    }

    #[test]
    fn test_save_validates_input() {
        // Arrange
        let mut library = PageLibrary::new(MemoryStore::new());

        // Act
        let unknown = library.save("missing", "x").expect_err("unknown page");
        let empty = library.save("home", "").expect_err("empty content");

        // Assert
        assert_eq!(
            store_error(&unknown),
            Some(&StoreError::UnknownPage("missing".to_string()))
        );
        assert_eq!(
            store_error(&empty),
            Some(&StoreError::EmptyContent("home".to_string()))
        );
        assert!(!library.store().contains("home").expect("contains"));
    }

    #[test]
    fn test_save_then_render() {
        // Arrange
        let mut library = PageLibrary::new(MemoryStore::new());
        library
            .save("layout", "# Layout\n\n> \u{1F4A1} use stacks")
            .expect("save");

        // Act
        let html = library.render("layout").expect("render");

        // Assert
        assert!(html.starts_with("<h1>Layout</h1>"));
        assert!(html.contains("<div class=\"note-title\">\u{1F4A1} ヒント</div>"));
    }

    #[test]
    fn test_summaries_report_stored_pages() {
        // Arrange
        let mut library = PageLibrary::new(MemoryStore::new());
        library.save("testing", "# Tests").expect("save");

        // Act
        let summaries = library.summaries().expect("summaries");

        // Assert
        assert_eq!(summaries.len(), 12);
        let stored: Vec<&str> = summaries
            .iter()
            .filter(|s| s.has_content)
            .map(|s| s.id)
            .collect();
        assert_eq!(stored, vec!["testing"]);
    }
}
