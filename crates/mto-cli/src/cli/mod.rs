//! CLI for the mto multi tab opener.

mod browser;
mod commands;
mod input;
mod progress;
mod prompt;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mto_core::settings::SearchEngine;
use std::path::PathBuf;

use commands::{run_open, run_search, run_settings, SettingsAction};

/// Top-level CLI for the mto multi tab opener.
#[derive(Debug, Parser)]
#[command(name = "mto")]
#[command(about = "mto: open many search queries or URLs as browser tabs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Turn every non-URL input line into a search query and open each
    /// result page as a tab.
    Search {
        /// File with one entry per line; reads stdin when omitted.
        file: Option<PathBuf>,

        /// Search engine for this run only (google, bing, duckduckgo, yahoo).
        #[arg(long)]
        engine: Option<SearchEngine>,

        /// Surround each query with double quotes for this run.
        #[arg(long)]
        quotes: bool,

        /// Extra parameters appended to every query for this run.
        #[arg(long, value_name = "PARAMS")]
        extra: Option<String>,

        /// Skip the large-batch confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Open every URL-looking input line directly as a tab.
    Open {
        /// File with one entry per line; reads stdin when omitted.
        file: Option<PathBuf>,

        /// Prepend https:// to lines without a scheme for this run.
        #[arg(long)]
        https: bool,

        /// Skip the large-batch confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Show or edit persisted settings.
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        match cli.command {
            CliCommand::Search {
                file,
                engine,
                quotes,
                extra,
                yes,
            } => run_search(file.as_deref(), engine, quotes, extra, yes),
            CliCommand::Open { file, https, yes } => run_open(file.as_deref(), https, yes),
            CliCommand::Settings { action } => run_settings(action),
        }
    }
}
