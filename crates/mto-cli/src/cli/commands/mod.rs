//! Subcommand implementations.

mod open;
mod search;
mod settings;

pub use open::run_open;
pub use search::run_search;
pub use settings::{run_settings, SettingsAction};

use anyhow::Result;
use mto_core::opener::{self, BatchStatus, ConfirmPrompt, ProgressSink, TabCreator};
use mto_core::settings::Settings;
use std::path::Path;

use super::browser::BrowserTabs;
use super::input;
use super::progress::TerminalProgress;
use super::prompt::{AssumeYes, TerminalConfirm};

/// Runs a batch with the real browser, terminal prompt and progress line.
pub(crate) fn run_batch_interactive(
    urls: &[String],
    file: Option<&Path>,
    settings: &Settings,
    assume_yes: bool,
) -> Result<()> {
    let mut tabs = BrowserTabs::from_env();
    let mut progress = TerminalProgress;

    let mut interactive = TerminalConfirm;
    let mut always = AssumeYes;
    let confirm: &mut dyn ConfirmPrompt = if assume_yes { &mut always } else { &mut interactive };

    run_batch(urls, file, settings, &mut tabs, confirm, &mut progress)
}

/// Shared tail of `search` and `open`: run the batch through the given
/// capabilities, then truncate the input file only when the input came from
/// a file, clear-after-run is set, and the batch actually completed.
pub(crate) fn run_batch(
    urls: &[String],
    file: Option<&Path>,
    settings: &Settings,
    tabs: &mut dyn TabCreator,
    confirm: &mut dyn ConfirmPrompt,
    progress: &mut dyn ProgressSink,
) -> Result<()> {
    let report = opener::open_batch(urls, tabs, confirm, progress);

    if report.status == BatchStatus::Completed && settings.clear_after_run {
        if let Some(path) = file {
            input::clear_file(path)?;
        }
    }
    Ok(())
}
