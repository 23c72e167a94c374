//! Logging init: file under the XDG state dir, or fallback to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,mto=debug"))
}

/// Initialize structured logging to `~/.local/state/mto/mto.log`.
/// On failure (e.g. state dir unwritable), returns Err so the caller can use
/// [`init_stderr`] instead.
pub fn init() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mto")?;
    let log_path = xdg_dirs.place_state_file("mto.log")?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Each event gets a clone of the file handle; if cloning ever fails
    // mid-run the event goes to stderr instead of being dropped.
    let writer = BoxMakeWriter::new(move || -> Box<dyn io::Write> {
        match file.try_clone() {
            Ok(clone) => Box::new(clone),
            Err(_) => Box::new(io::stderr()),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("mto logging initialized at {}", log_path.display());
    Ok(())
}

/// Initialize logging to stderr only. Used when [`init`] fails so the CLI
/// still runs.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
