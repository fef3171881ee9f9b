use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;

/// Send log records to a file so they never land on the TUI's screen.
///
/// `RUST_LOG` still overrides the configured level.
pub fn setup_logging(log_file: &Path, level: LevelFilter) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("opening log file {}", log_file.display()))?;

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialized")?;

    log::info!("Logging initialized at level: {}", level);
    log::info!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    Ok(())
}
