//! `mto open` – open every URL line directly as a tab.

use anyhow::Result;
use mto_core::compose;
use mto_core::settings;
use std::path::Path;

use super::run_batch_interactive;
use crate::cli::input;

pub fn run_open(file: Option<&Path>, https: bool, assume_yes: bool) -> Result<()> {
    let mut settings = settings::load_or_init()?;
    if https {
        settings.add_https = true;
    }

    let text = input::read_text(file)?;
    let urls = compose::derive_urls(&text, &settings);
    tracing::debug!(count = urls.len(), "derived direct urls");

    run_batch_interactive(&urls, file, &settings, assume_yes)
}
