//! Search engine selection and base endpoints.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Search engine a query line is sent to. The base endpoints are fixed
/// literals; the query string is appended percent-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchEngine {
    #[default]
    Google,
    Bing,
    DuckDuckGo,
    Yahoo,
}

impl SearchEngine {
    /// Endpoint the encoded query is appended to.
    pub fn base_url(self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/search?q=",
            SearchEngine::Bing => "https://www.bing.com/search?q=",
            SearchEngine::DuckDuckGo => "https://duckduckgo.com/?q=",
            SearchEngine::Yahoo => "https://search.yahoo.com/search?p=",
        }
    }

    /// Canonical lowercase name used in the settings file and on the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchEngine::Google => "google",
            SearchEngine::Bing => "bing",
            SearchEngine::DuckDuckGo => "duckduckgo",
            SearchEngine::Yahoo => "yahoo",
        }
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown search engine '{0}' (expected google, bing, duckduckgo or yahoo)")]
pub struct UnknownEngine(String);

impl FromStr for SearchEngine {
    type Err = UnknownEngine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(SearchEngine::Google),
            "bing" => Ok(SearchEngine::Bing),
            "duckduckgo" => Ok(SearchEngine::DuckDuckGo),
            "yahoo" => Ok(SearchEngine::Yahoo),
            other => Err(UnknownEngine(other.to_string())),
        }
    }
}

impl Serialize for SearchEngine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// A settings file written by a different build may carry an engine name this
// build does not know; queries still have to go somewhere, so unrecognized
// names fall back to Google instead of failing the whole load.
impl<'de> Deserialize<'de> for SearchEngine {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(name.parse().unwrap_or_default())
    }
}
