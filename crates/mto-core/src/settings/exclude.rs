//! Site-exclusion filters appended to search queries as `-site:` terms.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One excludable site. The declaration order is the canonical order the
/// filter terms are appended in, independent of how the set was built up
/// (`Ord` on the enum follows declaration order, and the active set is a
/// `BTreeSet`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ExcludeSite {
    Youtube,
    Soundcloud,
    Itunes,
    Beatport,
    Facebook,
    Discogs,
    Mixcloud,
    Traxsource,
    ResidentAdvisor,
    TrackItDown,
    DjDownload,
    JunoDownload,
}

impl ExcludeSite {
    /// Every filter in canonical order.
    pub const ALL: [ExcludeSite; 12] = [
        ExcludeSite::Youtube,
        ExcludeSite::Soundcloud,
        ExcludeSite::Itunes,
        ExcludeSite::Beatport,
        ExcludeSite::Facebook,
        ExcludeSite::Discogs,
        ExcludeSite::Mixcloud,
        ExcludeSite::Traxsource,
        ExcludeSite::ResidentAdvisor,
        ExcludeSite::TrackItDown,
        ExcludeSite::DjDownload,
        ExcludeSite::JunoDownload,
    ];

    /// Domain the filter excludes. iTunes results live under apple.com.
    pub fn domain(self) -> &'static str {
        match self {
            ExcludeSite::Youtube => "youtube.com",
            ExcludeSite::Soundcloud => "soundcloud.com",
            ExcludeSite::Itunes => "apple.com",
            ExcludeSite::Beatport => "beatport.com",
            ExcludeSite::Facebook => "facebook.com",
            ExcludeSite::Discogs => "discogs.com",
            ExcludeSite::Mixcloud => "mixcloud.com",
            ExcludeSite::Traxsource => "traxsource.com",
            ExcludeSite::ResidentAdvisor => "residentadvisor.net",
            ExcludeSite::TrackItDown => "trackitdown.net",
            ExcludeSite::DjDownload => "djdownload.com",
            ExcludeSite::JunoDownload => "junodownload.com",
        }
    }

    /// Search operator form, e.g. `-site:youtube.com`.
    pub fn filter_term(self) -> String {
        format!("-site:{}", self.domain())
    }

    /// Lowercase name used in the settings file and on the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            ExcludeSite::Youtube => "youtube",
            ExcludeSite::Soundcloud => "soundcloud",
            ExcludeSite::Itunes => "itunes",
            ExcludeSite::Beatport => "beatport",
            ExcludeSite::Facebook => "facebook",
            ExcludeSite::Discogs => "discogs",
            ExcludeSite::Mixcloud => "mixcloud",
            ExcludeSite::Traxsource => "traxsource",
            ExcludeSite::ResidentAdvisor => "residentadvisor",
            ExcludeSite::TrackItDown => "trackitdown",
            ExcludeSite::DjDownload => "djdownload",
            ExcludeSite::JunoDownload => "junodownload",
        }
    }
}

impl fmt::Display for ExcludeSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown site filter '{0}' (run `mto settings show` for the full list)")]
pub struct UnknownSite(String);

impl FromStr for ExcludeSite {
    type Err = UnknownSite;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExcludeSite::ALL
            .into_iter()
            .find(|site| site.as_str() == s)
            .ok_or_else(|| UnknownSite(s.to_string()))
    }
}
