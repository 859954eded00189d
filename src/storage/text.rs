use regex::Regex;
use std::sync::LazyLock;

static TERM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"]*)"|(\S+)"#).expect("search term pattern is valid")
});

/// Case-insensitive substring test used by every textual filter.
///
/// An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// One word of a full-text search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    pub text: String,
    /// `-word` excludes records containing `word`.
    pub exclude: bool,
}

/// Splits a full-text query into terms.
///
/// Double-quoted phrases are kept whole, everything else splits on
/// whitespace. Stray quotes are dropped and empty terms are skipped.
pub fn search_terms(query: &str) -> Vec<SearchTerm> {
    TERM_PATTERN
        .captures_iter(query)
        .filter_map(|caps| {
            let raw = caps.get(1).or_else(|| caps.get(2))?.as_str();
            let raw = raw.trim_matches('"');
            let (text, exclude) = match raw.strip_prefix('-') {
                Some(rest) if !rest.is_empty() => (rest, true),
                _ => (raw, false),
            };
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            Some(SearchTerm {
                text: text.to_string(),
                exclude,
            })
        })
        .collect()
}
