//! Turns a block of input text into destination URLs.
//!
//! Each non-blank line is either a URL (opened directly, see [`derive_urls`])
//! or a search term (sent to the configured engine, see [`derive_queries`]).
//! Both functions are pure and total: no I/O, any input string is fine, and
//! output order follows input order top to bottom.

mod classify;

pub use classify::is_url_line;

use crate::settings::Settings;

/// Splits `text` into lines, trims for output when `trim` is set, and drops
/// lines that are empty after trimming (emptiness is always judged on the
/// trimmed form, even when trimming is off for output).
fn surviving_lines(text: &str, trim: bool) -> Vec<&str> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| if trim { line.trim() } else { line })
        .collect()
}

/// Derives one search URL per non-URL input line.
///
/// Per line: optional quote-surrounding, then the active `-site:` filter
/// terms in canonical order, then the trimmed extra parameters, then the
/// whole composed query is percent-encoded and appended to the engine's
/// base endpoint.
pub fn derive_queries(text: &str, settings: &Settings) -> Vec<String> {
    let filter_terms = settings.active_filter_terms();
    let extra = settings.extra_parameters.trim();
    let base = settings.search_engine.base_url();

    surviving_lines(text, settings.trim_lines)
        .into_iter()
        .filter(|line| !is_url_line(line.trim()))
        .map(|line| {
            let mut query = if settings.surround_quotes {
                format!("\"{line}\"")
            } else {
                line.to_string()
            };
            for term in &filter_terms {
                query.push(' ');
                query.push_str(term);
            }
            if !extra.is_empty() {
                query.push(' ');
                query.push_str(extra);
            }
            format!("{base}{}", urlencoding::encode(&query))
        })
        .collect()
}

/// Derives one destination URL per URL-looking input line. With `add_https`
/// set, lines without an `http://`/`https://` scheme get `https://` prepended.
pub fn derive_urls(text: &str, settings: &Settings) -> Vec<String> {
    surviving_lines(text, settings.trim_lines)
        .into_iter()
        .filter(|line| is_url_line(line.trim()))
        .map(|line| {
            if settings.add_https
                && !line.starts_with("http://")
                && !line.starts_with("https://")
            {
                format!("https://{line}")
            } else {
                line.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ExcludeSite, SearchEngine};

    fn settings() -> Settings {
        Settings {
            trim_lines: true,
            ..Settings::default()
        }
    }

    #[test]
    fn bing_quoted_example() {
        let mut s = settings();
        s.search_engine = SearchEngine::Bing;
        s.surround_quotes = true;

        let text = "cat videos\nhttp://example.com\n  \nbar";
        assert_eq!(
            derive_queries(text, &s),
            vec![
                "https://www.bing.com/search?q=%22cat%20videos%22".to_string(),
                "https://www.bing.com/search?q=%22bar%22".to_string(),
            ]
        );
        assert_eq!(derive_urls(text, &s), vec!["http://example.com".to_string()]);
    }

    #[test]
    fn queries_and_urls_partition_all_nonblank_lines() {
        let s = settings();
        let text = "first query\nwww.example.com\n\n  \nsecond query\nexample.org/page\n";
        let queries = derive_queries(text, &s);
        let urls = derive_urls(text, &s);

        let nonblank = text.lines().filter(|l| !l.trim().is_empty()).count();
        assert_eq!(queries.len() + urls.len(), nonblank);
        assert_eq!(queries.len(), 2);
        assert_eq!(urls.len(), 2);
    }

    #[test]
    fn add_https_only_without_scheme() {
        let mut s = settings();
        s.add_https = true;
        assert_eq!(
            derive_urls("example.org/page", &s),
            vec!["https://example.org/page".to_string()]
        );
        assert_eq!(
            derive_urls("https://already.com", &s),
            vec!["https://already.com".to_string()]
        );
        assert_eq!(
            derive_urls("http://plain.net", &s),
            vec!["http://plain.net".to_string()]
        );
    }

    #[test]
    fn filters_append_in_canonical_order() {
        let mut s = settings();
        s.exclude_sites.insert(ExcludeSite::Facebook);
        s.exclude_sites.insert(ExcludeSite::Youtube);

        let queries = derive_queries("deep house mix", &s);
        assert_eq!(
            queries,
            vec![
                "https://www.google.com/search?q=deep%20house%20mix%20-site%3Ayoutube.com%20-site%3Afacebook.com"
                    .to_string()
            ]
        );
    }

    #[test]
    fn extra_parameters_trimmed_and_appended() {
        let mut s = settings();
        s.extra_parameters = "  filetype:pdf  ".to_string();
        assert_eq!(
            derive_queries("annual report", &s),
            vec!["https://www.google.com/search?q=annual%20report%20filetype%3Apdf".to_string()]
        );

        // Whitespace-only extras are ignored entirely.
        s.extra_parameters = "   ".to_string();
        assert_eq!(
            derive_queries("annual report", &s),
            vec!["https://www.google.com/search?q=annual%20report".to_string()]
        );
    }

    #[test]
    fn untrimmed_lines_kept_verbatim_when_trim_is_off() {
        let mut s = settings();
        s.trim_lines = false;
        let queries = derive_queries("  spaced query  ", &s);
        assert_eq!(
            queries,
            vec!["https://www.google.com/search?q=%20%20spaced%20query%20%20".to_string()]
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let s = settings();
        assert!(derive_queries("", &s).is_empty());
        assert!(derive_urls("", &s).is_empty());
        assert!(derive_queries("\n\n  \n", &s).is_empty());
        assert!(derive_urls("\n\n  \n", &s).is_empty());
    }
}
