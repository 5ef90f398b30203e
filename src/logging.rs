use anyhow::{Context, Result};
use std::{fs::OpenOptions, path::Path, sync::Mutex};
use tracing_subscriber::{EnvFilter, fmt::time::ChronoLocal};

const LOG_LEVEL_ENV: &str = "WPANET_LOG_LEVEL";

/// Sends tracing output to `path`. The terminal belongs to the UI, so without
/// a log file no subscriber is installed at all.
pub fn init_tracing_subscriber(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_timer(ChronoLocal::rfc_3339())
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot install log subscriber: {e}"))?;
    Ok(())
}
