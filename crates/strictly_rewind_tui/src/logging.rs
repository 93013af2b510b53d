//! Tracing subscriber setup.

use crate::settings::LogSettings;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn filter(settings: &LogSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.filter()))
}

/// Logs to the configured file so output does not interfere with the TUI.
pub fn init_file(settings: &LogSettings) -> Result<()> {
    let log_file = std::fs::File::create(settings.file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(settings))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Logs to stderr, leaving stdout for command output.
pub fn init_stderr(settings: &LogSettings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(settings))
        .with_writer(std::io::stderr)
        .try_init();
}
