//! Diagnostics logging
//!
//! The terminal belongs to the renderer while the editor runs, so log output
//! always goes to a file.

use anyhow::{Context, Result as AnyhowResult};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Default log location: `<temp dir>/kite.log`
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("kite.log")
}

/// Install a global subscriber writing to `path`.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_file_logging(path: &Path) -> AnyhowResult<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    tracing::info!("Logging to {}", path.display());
    Ok(())
}
