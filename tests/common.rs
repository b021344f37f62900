//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating temporary content directories and
//! writing page drafts used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates temporary directory with an empty `content` subdirectory.
///
/// # Returns
///
/// Temporary directory and the content directory path inside it
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_content_dir() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let content = dir.path().join("content");
    std::fs::create_dir_all(&content)?;
    Ok((dir, content))
}

/// Writes file below `root`, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<PathBuf> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}
