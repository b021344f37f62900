//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const SITE: &str = include_str!("../assets/site.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!("Failed to create assets directory: {}", assets_dir.display())
    })?;
    write_asset(assets_dir, "site.css", SITE)?;
    write_asset(assets_dir, "markdown.css", MARKDOWN)?;
    Ok(())
}

fn write_asset(dir: &Path, name: &str, css: &str) -> Result<()> {
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
