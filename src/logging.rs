//! File + console logging.
//!
//! Every log line goes to the console and to an append-only file under the
//! directory named by `LOG_DIR` (default `log/`). The level filter comes
//! from `LOG_LEVEL` (default `info`).

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE: &str = "app.log";

/// Directory log files land in, from `LOG_DIR` or the `log/` default.
pub fn log_directory() -> PathBuf {
    std::env::var("LOG_DIR")
        .ok()
        .filter(|d| !d.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("log"))
}

/// Install the global subscriber: an ANSI console layer plus a plain-text
/// file layer. Creates the log directory if needed. Call once at startup.
pub fn init() -> Result<()> {
    let dir = log_directory();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating log directory: {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .context("installing global tracing subscriber")?;
    Ok(())
}
