//! URL-vs-query classification of a single input line.

/// Markers that make a dotted line count as a URL rather than a search term.
const URL_MARKERS: [&str; 5] = ["http", "www", ".com", ".org", ".net"];

/// Returns true if `line` looks like a URL: it contains a `.` and at least
/// one of the URL markers. Everything else is a search term. The check is a
/// cheap heuristic on purpose; a line like `pi is 3.14` stays a search term
/// because no marker matches.
///
/// Callers pass the trimmed form; classification is deterministic, so a line
/// is either a URL or a query for the whole run, never both.
pub fn is_url_line(line: &str) -> bool {
    line.contains('.') && URL_MARKERS.iter().any(|marker| line.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_detected() {
        assert!(is_url_line("http://example.com"));
        assert!(is_url_line("https://example.org/page"));
        assert!(is_url_line("www.example.de"));
        assert!(is_url_line("example.net/path"));
        assert!(is_url_line("sub.domain.com"));
    }

    #[test]
    fn queries_are_not() {
        assert!(!is_url_line("cat videos"));
        assert!(!is_url_line("pi is 3.14"));
        // Marker without a dot is not enough.
        assert!(!is_url_line("wwwhatever"));
        assert!(!is_url_line(""));
    }

    #[test]
    fn classification_is_idempotent() {
        for line in ["rust tutorial", "www.example.io", "pi is 3.14"] {
            assert_eq!(is_url_line(line), is_url_line(line));
        }
    }
}
