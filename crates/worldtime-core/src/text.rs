// crates/worldtime-core/src/text.rs

//! Tokenizing and prefix matching shared by the index and the ranker.

/// Characters that separate query tokens, in addition to being ignored.
const QUERY_SEPARATORS: &[char] = &[
    '\t', ' ', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '/', ':', ';', ',', '.', '_',
    '-',
];

/// Normalize a raw query: trimmed and lowercased.
#[inline]
pub fn normalize_query(q: &str) -> String {
    q.trim().to_lowercase()
}

/// Split an already normalized query into search tokens.
///
/// Empty tokens are discarded, so a punctuation-only query yields no tokens.
///
/// ```rust
/// use worldtime_core::text::query_tokens;
///
/// assert_eq!(query_tokens("new york, us"), vec!["new", "york", "us"]);
/// assert!(query_tokens("--//").is_empty());
/// ```
pub fn query_tokens(q: &str) -> Vec<&str> {
    q.split(QUERY_SEPARATORS).filter(|t| !t.is_empty()).collect()
}

/// Lowercase whitespace tokens of a display string.
pub fn lower_words(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_lowercase).collect()
}

/// Lowercase tokens of a zone name, split on the same characters as queries
/// (`America/New_York` -> `["america", "new", "york"]`).
pub fn zone_words(s: &str) -> Vec<String> {
    s.split(|c: char| c.is_whitespace() || QUERY_SEPARATORS.contains(&c))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Earliest word index at which any token prefix-matches.
///
/// Every token must be a prefix of at least one word, otherwise the whole
/// match fails and `None` is returned. On success the smallest index of a
/// word that some token matched is returned.
///
/// ```rust
/// use worldtime_core::text::match_position;
///
/// let words = vec!["san".to_string(), "francisco".to_string()];
/// assert_eq!(match_position(&["fran"], &words), Some(1));
/// assert_eq!(match_position(&["fran", "sa"], &words), Some(0));
/// assert_eq!(match_position(&["fran", "x"], &words), None);
/// ```
pub fn match_position<S: AsRef<str>>(tokens: &[&str], words: &[S]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for token in tokens {
        let idx = words
            .iter()
            .position(|w| w.as_ref().starts_with(*token))?;
        best = Some(best.map_or(idx, |b| b.min(idx)));
    }
    best
}

/// Build the unique city key `country/name[/state]` with spaces as `_`.
///
/// ```rust
/// use worldtime_core::text::city_key;
///
/// assert_eq!(city_key("US", "New York", Some("NY")), "US/New_York/NY");
/// assert_eq!(city_key("FR", "Paris", None), "FR/Paris");
/// ```
pub fn city_key(country_code: &str, name: &str, state: Option<&str>) -> String {
    let mut key = format!("{country_code}/{name}");
    if let Some(state) = state {
        key.push('/');
        key.push_str(state);
    }
    key.replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_tokens_split_on_every_separator() {
        let q = normalize_query("  A!b@c#d$e%f^g&h*i(j)k/l:m;n,o.p_q-r\ts ");
        assert_eq!(
            query_tokens(&q),
            vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s"]
        );
    }

    #[test]
    fn empty_query_has_no_tokens() {
        assert!(query_tokens(&normalize_query("   ")).is_empty());
        assert!(query_tokens("").is_empty());
    }

    #[test]
    fn zone_words_split_paths() {
        assert_eq!(
            zone_words("America/Argentina/Buenos_Aires EST/EDT"),
            vec!["america", "argentina", "buenos", "aires", "est", "edt"]
        );
        assert_eq!(
            zone_words("America/Port-au-Prince"),
            vec!["america", "port", "au", "prince"]
        );
    }

    #[test]
    fn every_query_token_of_a_zone_name_is_a_word() {
        let words = zone_words("America/New_York");
        for q in ["new york", "new_york", "york", "America/New_York"] {
            let q = normalize_query(q);
            assert!(match_position(&query_tokens(&q), &words).is_some(), "{q}");
        }
    }

    #[test]
    fn match_position_requires_every_token() {
        let words = lower_words("New York (NY) United States");
        assert_eq!(match_position(&["york"], &words), Some(1));
        assert_eq!(match_position(&["uni", "ne"], &words), Some(0));
        assert_eq!(match_position(&["uni", "london"], &words), None);
    }

    #[test]
    fn match_position_empty_tokens_is_none() {
        let words = lower_words("Paris");
        assert_eq!(match_position(&[], &words), None);
    }
}
