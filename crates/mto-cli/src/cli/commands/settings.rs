//! `mto settings` – show and edit the persisted preferences.

use anyhow::Result;
use clap::Subcommand;
use mto_core::settings::{self, ExcludeSite, SearchEngine, Settings};
use std::str::FromStr;

#[derive(Debug, Subcommand)]
pub enum SettingsAction {
    /// Print the current settings.
    Show,

    /// Set the default search engine (google, bing, duckduckgo, yahoo).
    Engine { engine: SearchEngine },

    /// Turn a boolean option on or off.
    Set {
        /// One of: trim-lines, surround-quotes, add-https, clear-after-run.
        option: BoolOption,
        /// true or false.
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },

    /// Set the extra parameters appended to every query (empty clears).
    Extra { params: String },

    /// Add a site-exclusion filter (e.g. youtube, facebook).
    Exclude { site: ExcludeSite },

    /// Remove a site-exclusion filter.
    Include { site: ExcludeSite },

    /// Enable every site-exclusion filter.
    SelectAll,

    /// Disable every site-exclusion filter.
    ClearFilters,

    /// Reset all settings to defaults.
    Reset,
}

/// Boolean preference addressable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOption {
    TrimLines,
    SurroundQuotes,
    AddHttps,
    ClearAfterRun,
}

impl BoolOption {
    fn apply(self, settings: &mut Settings, value: bool) {
        match self {
            BoolOption::TrimLines => settings.trim_lines = value,
            BoolOption::SurroundQuotes => settings.surround_quotes = value,
            BoolOption::AddHttps => settings.add_https = value,
            BoolOption::ClearAfterRun => settings.clear_after_run = value,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown option '{0}' (expected trim-lines, surround-quotes, add-https or clear-after-run)")]
pub struct UnknownOption(String);

impl FromStr for BoolOption {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trim-lines" => Ok(BoolOption::TrimLines),
            "surround-quotes" => Ok(BoolOption::SurroundQuotes),
            "add-https" => Ok(BoolOption::AddHttps),
            "clear-after-run" => Ok(BoolOption::ClearAfterRun),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}

pub fn run_settings(action: SettingsAction) -> Result<()> {
    match action {
        SettingsAction::Show => {
            let settings = settings::load_or_init()?;
            print!("{}", settings::to_toml(&settings)?);
            Ok(())
        }
        SettingsAction::Engine { engine } => edit(|s| s.search_engine = engine),
        SettingsAction::Set { option, value } => edit(|s| option.apply(s, value)),
        SettingsAction::Extra { params } => edit(|s| s.extra_parameters = params),
        SettingsAction::Exclude { site } => edit(|s| {
            s.exclude_sites.insert(site);
        }),
        SettingsAction::Include { site } => edit(|s| {
            s.exclude_sites.remove(&site);
        }),
        SettingsAction::SelectAll => edit(Settings::select_all_filters),
        SettingsAction::ClearFilters => edit(Settings::clear_all_filters),
        SettingsAction::Reset => {
            settings::reset()?;
            println!("Settings reset to defaults.");
            Ok(())
        }
    }
}

fn edit(change: impl FnOnce(&mut Settings)) -> Result<()> {
    let mut settings = settings::load_or_init()?;
    change(&mut settings);
    settings::save(&settings)?;
    Ok(())
}
