//! Input text loading and the clear-after-run behavior.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads the input text from `file`, or from stdin when no file was given.
pub fn read_text(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading input file {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading input from stdin")?;
            Ok(text)
        }
    }
}

/// Truncates the input file after a completed run (the clear-after-run
/// preference). Only ever called for file input, never stdin.
pub fn clear_file(path: &Path) -> Result<()> {
    fs::write(path, "").with_context(|| format!("clearing input file {}", path.display()))?;
    tracing::info!("cleared input file {}", path.display());
    Ok(())
}
