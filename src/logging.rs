//! Logging bootstrap for the command line tool.
//!
//! Library code only emits through the `log` facade; the binary decides
//! where records go by calling `init_logging` once at startup.

use anyhow::{Context, Result, bail};
use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Normalizes a user supplied level name.
///
/// # Errors
///
/// Returns error for names other than trace, debug, info, warn(ing), error
pub fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => bail!("Unsupported log level `{}`; expected trace|debug|info|warn|error", other),
    }
}

/// Starts stderr logging at `level` unless `RUST_LOG` overrides it.
///
/// Repeated calls keep the first logger.
///
/// # Errors
///
/// Returns error for unsupported levels or when the backend fails to start
pub fn init_logging(level: &str) -> Result<()> {
    let level = normalize_level(level)?;

    LOGGER.get_or_try_init(|| {
        Logger::try_with_env_or_str(level)
            .context("Invalid log specification")?
            .log_to_stderr()
            .start()
            .context("Failed to start logger")
    })?;

    Ok(())
}
