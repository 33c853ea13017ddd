//! URL deduplication
//!
//! First occurrence wins. Equality is the exact URL string: no
//! normalization of case, query strings, or trailing slashes.

use super::EventCandidate;
use std::collections::HashSet;

/// Collapses the harvested list to one entry per distinct URL
pub fn dedupe(candidates: Vec<EventCandidate>) -> Vec<EventCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(url: &str, text: &str) -> EventCandidate {
        EventCandidate {
            url: url.to_string(),
            date: None,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_first_occurrence_wins() {
        let input = vec![
            candidate("https://sunabaco.com/event/a", "first a"),
            candidate("https://sunabaco.com/event/b", "b"),
            candidate("https://sunabaco.com/event/a", "second a"),
        ];

        let output = dedupe(input);

        assert_eq!(output.len(), 2);
        assert_eq!(output[0].url, "https://sunabaco.com/event/a");
        assert_eq!(output[0].text, "first a");
        assert_eq!(output[1].url, "https://sunabaco.com/event/b");
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let input = vec![
            candidate("https://sunabaco.com/event/a", "a"),
            candidate("https://sunabaco.com/event/b", "b"),
            candidate("https://sunabaco.com/event/a", "dup"),
        ];

        let once = dedupe(input);
        let twice = dedupe(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_exact_string_equality_only() {
        // Trailing slash and query variants are distinct URLs
        let input = vec![
            candidate("https://sunabaco.com/event/a", "plain"),
            candidate("https://sunabaco.com/event/a/", "slash"),
            candidate("https://sunabaco.com/event/a?ref=top", "query"),
        ];

        assert_eq!(dedupe(input).len(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedupe(Vec::new()).is_empty());
    }
}
