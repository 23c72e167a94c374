//! `mto search` – open every query line as a search-results tab.

use anyhow::Result;
use mto_core::compose;
use mto_core::settings::{self, SearchEngine};
use std::path::Path;

use super::run_batch_interactive;
use crate::cli::input;

pub fn run_search(
    file: Option<&Path>,
    engine: Option<SearchEngine>,
    quotes: bool,
    extra: Option<String>,
    assume_yes: bool,
) -> Result<()> {
    // Snapshot the persisted settings, then layer this run's overrides on
    // the copy; the settings file itself is untouched.
    let mut settings = settings::load_or_init()?;
    if let Some(engine) = engine {
        settings.search_engine = engine;
    }
    if quotes {
        settings.surround_quotes = true;
    }
    if let Some(extra) = extra {
        settings.extra_parameters = extra;
    }

    let text = input::read_text(file)?;
    let urls = compose::derive_queries(&text, &settings);
    tracing::debug!(count = urls.len(), engine = %settings.search_engine, "derived search queries");

    run_batch_interactive(&urls, file, &settings, assume_yes)
}
