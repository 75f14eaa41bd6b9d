//! File logging. The terminal belongs to the TUI, so log records can only go
//! to a file, and only when the player asks for one.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Install a logger writing this crate's records at `level` or above to `path`
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let config = ConfigBuilder::new()
        .add_filter_allow_str(env!("CARGO_CRATE_NAME"))
        .build();

    WriteLogger::init(level, config, file).context("Failed to install logger")?;
    Ok(())
}
