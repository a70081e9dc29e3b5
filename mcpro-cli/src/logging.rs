//! Logging bootstrap: `log` records go to stderr through flexi_logger.
//!
//! `RUST_LOG` takes precedence over the configured `log_level`.

use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle};

const SUPPORTED_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Start the logger. Keep the returned handle alive for the whole run.
pub fn init(level: &str) -> Result<LoggerHandle> {
    let level = normalize_level(level)?;

    Logger::try_with_env_or_str(level)
        .with_context(|| format!("invalid log level `{level}`"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .context("failed to start logger")
}

fn normalize_level(level: &str) -> Result<&'static str> {
    let wanted = level.trim().to_ascii_lowercase();
    SUPPORTED_LEVELS
        .into_iter()
        .find(|l| *l == wanted)
        .with_context(|| {
            format!(
                "unsupported log level `{level}` (expected one of: {})",
                SUPPORTED_LEVELS.join(", ")
            )
        })
}
