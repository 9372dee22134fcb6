//! Logging system initialization
//!
//! Sets up tracing-based logging with daily-rotated file output next to the
//! configuration file.

use crate::config::ConfigManager;
use crate::error::{Result, SpinboxError};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via the `RUST_LOG`
/// environment variable. Output goes to a daily-rotated `spinbox.log` in the
/// configuration directory.
pub fn init_logging() -> Result<()> {
    let log_dir = ConfigManager::ensure_config_dir()?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("spinbox")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| SpinboxError::Config(Box::new(e)))?;

    // Build the subscriber with file output
    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false) // Disable ANSI colors for file output
        .with_target(true) // Include target module
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| SpinboxError::Config(Box::new(e)))?;

    tracing::info!("spinbox v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}
