use anyhow::{Context, Result};
use certstudy::{Config, FileStore, PageLibrary, generate_preview, generate_site, init_logging};
use log::{info, warn};

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config.log_level).context("Failed to initialize logging")?;
    config.validate().context("Invalid configuration")?;

    if let Some(source) = &config.preview {
        let path = generate_preview(source, &config.output)?;
        println!("Preview written to {}", path.display());
        open_in_browser(&config, &path);
        return Ok(());
    }

    let mut library = PageLibrary::new(FileStore::new(&config.content));

    for (page_id, content) in config.read_imports()? {
        library
            .save(&page_id, &content)
            .with_context(|| format!("Failed to import page {}", page_id))?;
        info!("Imported page {}", page_id);
    }

    let report = generate_site(&mut library, &config.output, &config.title)
        .context("Failed to generate site")?;

    println!(
        "Generated {} pages in {}",
        report.pages.len(),
        config.output.display()
    );

    open_in_browser(&config, &report.index);
    Ok(())
}

fn open_in_browser(config: &Config, path: &std::path::Path) {
    if config.no_open {
        return;
    }

    if let Err(e) = open::that(path) {
        warn!("Failed to open {}: {:#}", path.display(), e);
    }
}
