use crate::config::Config;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use tracing_subscriber::EnvFilter;

/// Initialize log output
///
/// Logs go to stdout unless telemetry is enabled, in which case they are
/// appended to the configured file (parent directories created as needed).
/// `RUST_LOG` overrides the default `info` filter either way.
///
/// # Errors
/// Returns an error when the log file or its directory cannot be created.
pub fn init(enabled: bool, log_path: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if !enabled {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
        return Ok(());
    }

    let expanded_path = Config::expand_path(log_path)?;

    if let Some(parent) = expanded_path.parent() {
        fs::create_dir_all(parent).context("failed to create log directory")?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&expanded_path)
        .context("failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_target(false)
        .with_ansi(false)
        .init();

    tracing::info!("logging to {}", expanded_path.display());

    Ok(())
}
