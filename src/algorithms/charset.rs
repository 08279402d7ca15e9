//! Character-level overlap measures
//!
//! Cheap structural checks that catch typical typing slips in short
//! identifiers: dropped letters ("nflx" for "netflix"), swapped neighbours
//! and out-of-order fragments.
//!
//! All functions compare chars exactly; callers normalize case first.

use ahash::{AHashMap, AHashSet};

/// Returns true if every char of `query` occurs somewhere in `text`.
///
/// Order and multiplicity are ignored. An empty query is trivially contained.
#[must_use]
pub fn contains_all_chars(query: &str, text: &str) -> bool {
    let available: AHashSet<char> = text.chars().collect();
    query.chars().all(|c| available.contains(&c))
}

/// Returns true if the chars of `query` appear in `text` in the same
/// relative order, not necessarily contiguous.
#[must_use]
pub fn is_subsequence(query: &str, text: &str) -> bool {
    let mut remaining = text.chars();
    query.chars().all(|qc| remaining.any(|tc| tc == qc))
}

/// Percentage of `query` chars that `text` can supply, respecting counts.
///
/// For each distinct char in `query`, counts `min(occurrences in query,
/// occurrences in text)`; the sum is divided by the query length and scaled
/// to 0..=100. Returns 0.0 for an empty query.
#[must_use]
pub fn char_frequency_score(query: &str, text: &str) -> f64 {
    let mut query_counts: AHashMap<char, usize> = AHashMap::new();
    let mut total = 0usize;
    for c in query.chars() {
        *query_counts.entry(c).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    let mut text_counts: AHashMap<char, usize> = AHashMap::with_capacity(query_counts.len());
    for c in text.chars().filter(|c| query_counts.contains_key(c)) {
        *text_counts.entry(c).or_insert(0) += 1;
    }

    let matched: usize = query_counts
        .iter()
        .map(|(c, &count)| count.min(text_counts.get(c).copied().unwrap_or(0)))
        .sum();

    matched as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_all_chars() {
        assert!(contains_all_chars("nflx", "netflix"));
        assert!(contains_all_chars("lpap", "apple"));
        assert!(contains_all_chars("", "anything"));
        assert!(!contains_all_chars("msft", "apple"));
    }

    #[test]
    fn test_is_subsequence() {
        assert!(is_subsequence("nflx", "netflix"));
        assert!(is_subsequence("", "abc"));
        assert!(!is_subsequence("xn", "netflix"));
        // Multiplicity matters for ordering: "aapl" has a single 'p'
        assert!(!is_subsequence("appl", "aapl"));
        assert!(is_subsequence("테라", "테슬라"));
    }

    #[test]
    fn test_char_frequency_score() {
        assert_eq!(char_frequency_score("nflx", "netflix"), 100.0);
        // a:1, p:min(2,1)=1, l:1 -> 3/4
        assert_eq!(char_frequency_score("appl", "aapl"), 75.0);
        assert_eq!(char_frequency_score("abc", "xyz"), 0.0);
        assert_eq!(char_frequency_score("", "xyz"), 0.0);
    }
}
