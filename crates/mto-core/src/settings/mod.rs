//! User settings: search engine, text transforms, site-exclusion filters.
//!
//! A run takes a snapshot of `Settings` at start; edits made while a batch is
//! in flight land in the settings file and only affect later runs.

mod engine;
mod exclude;
mod persist;

pub use engine::SearchEngine;
pub use exclude::ExcludeSite;
pub use persist::{load_or_init, reset, save, settings_path, to_toml};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Persisted preferences, loaded from `~/.config/mto/settings.toml`.
/// `Default` is the reset state: Google, no transforms, no filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Engine query lines are sent to.
    #[serde(default)]
    pub search_engine: SearchEngine,
    /// Trim leading/trailing whitespace from every input line.
    #[serde(default)]
    pub trim_lines: bool,
    /// Wrap each query in literal double quotes (exact-phrase search).
    #[serde(default)]
    pub surround_quotes: bool,
    /// Prepend `https://` to URL lines that have no scheme.
    #[serde(default)]
    pub add_https: bool,
    /// Truncate the input file after a completed run.
    #[serde(default)]
    pub clear_after_run: bool,
    /// Active site-exclusion filters; iterates in canonical order.
    #[serde(default)]
    pub exclude_sites: BTreeSet<ExcludeSite>,
    /// Free-text appended to every query (e.g. `filetype:pdf`).
    #[serde(default)]
    pub extra_parameters: String,
}

impl Settings {
    /// Enable every site-exclusion filter.
    pub fn select_all_filters(&mut self) {
        self.exclude_sites = ExcludeSite::ALL.into_iter().collect();
    }

    /// Disable every site-exclusion filter.
    pub fn clear_all_filters(&mut self) {
        self.exclude_sites.clear();
    }

    /// Active filter terms (`-site:<domain>`) in canonical order.
    pub fn active_filter_terms(&self) -> Vec<String> {
        self.exclude_sites
            .iter()
            .map(|site| site.filter_term())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reset_state() {
        let s = Settings::default();
        assert_eq!(s.search_engine, SearchEngine::Google);
        assert!(!s.trim_lines);
        assert!(!s.surround_quotes);
        assert!(!s.add_https);
        assert!(!s.clear_after_run);
        assert!(s.exclude_sites.is_empty());
        assert!(s.extra_parameters.is_empty());
    }

    #[test]
    fn select_all_then_clear() {
        let mut s = Settings::default();
        s.select_all_filters();
        assert_eq!(s.exclude_sites.len(), ExcludeSite::ALL.len());
        s.clear_all_filters();
        assert!(s.exclude_sites.is_empty());
    }

    #[test]
    fn active_filter_terms_canonical_order() {
        let mut s = Settings::default();
        s.exclude_sites.insert(ExcludeSite::Discogs);
        s.exclude_sites.insert(ExcludeSite::Youtube);
        assert_eq!(
            s.active_filter_terms(),
            vec!["-site:youtube.com".to_string(), "-site:discogs.com".to_string()]
        );
    }

    #[test]
    fn toml_round_trip() {
        let mut s = Settings::default();
        s.search_engine = SearchEngine::Bing;
        s.trim_lines = true;
        s.exclude_sites.insert(ExcludeSite::Facebook);
        s.extra_parameters = "filetype:pdf".to_string();

        let text = toml::to_string_pretty(&s).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed.search_engine, SearchEngine::Bing);
        assert!(parsed.trim_lines);
        assert!(parsed.exclude_sites.contains(&ExcludeSite::Facebook));
        assert_eq!(parsed.extra_parameters, "filetype:pdf");
    }

    #[test]
    fn missing_fields_default() {
        // A settings file from an older build may lack newer fields.
        let parsed: Settings = toml::from_str("search_engine = \"yahoo\"").unwrap();
        assert_eq!(parsed.search_engine, SearchEngine::Yahoo);
        assert!(!parsed.surround_quotes);
        assert!(parsed.exclude_sites.is_empty());
    }
}
