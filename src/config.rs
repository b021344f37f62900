//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Default site title shown in headings and breadcrumbs.
pub const DEFAULT_SITE_TITLE: &str = "SwiftUI リファレンス";

/// Page content imported from a file before generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImport {
    pub page_id: String,
    pub source: PathBuf,
}

/// Parses `ID=FILE` import arguments.
fn parse_import(value: &str) -> Result<PageImport, String> {
    let (page_id, source) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ID=FILE, got `{}`", value))?;

    if page_id.is_empty() || source.is_empty() {
        return Err(format!("expected ID=FILE, got `{}`", value));
    }

    Ok(PageImport {
        page_id: page_id.to_string(),
        source: PathBuf::from(source),
    })
}

/// Command line configuration for certstudy.
#[derive(Debug, Clone, Parser)]
#[command(name = "certstudy", version, about, long_about = None)]
pub struct Config {
    /// Content directory holding one markdown file per page
    #[arg(default_value = "content")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site title
    #[arg(long, default_value = DEFAULT_SITE_TITLE)]
    pub title: String,

    /// Replace page content from a file before generating (ID=FILE)
    #[arg(long = "import", value_name = "ID=FILE", value_parser = parse_import)]
    pub imports: Vec<PageImport>,

    /// Render a single markdown draft to preview.html and exit
    #[arg(long, value_name = "FILE")]
    pub preview: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content path is not a directory, or an import
    /// or preview source file does not exist.
    pub fn validate(&self) -> Result<()> {
        if self.content.exists() && !self.content.is_dir() {
            bail!(
                "Content path is not a directory: {}",
                self.content.display()
            );
        }

        for import in &self.imports {
            if !import.source.is_file() {
                bail!(
                    "Import source for page {} does not exist: {}",
                    import.page_id,
                    import.source.display()
                );
            }
        }

        if let Some(preview) = &self.preview
            && !preview.is_file()
        {
            bail!("Preview source does not exist: {}", preview.display());
        }

        Ok(())
    }

    /// Reads the content of every import.
    ///
    /// # Errors
    ///
    /// Returns error if an import source cannot be read.
    pub fn read_imports(&self) -> Result<Vec<(String, String)>> {
        self.imports
            .iter()
            .map(|import| {
                std::fs::read_to_string(&import.source)
                    .with_context(|| format!("Failed to read {}", import.source.display()))
                    .map(|content| (import.page_id.clone(), content))
            })
            .collect()
    }
}
