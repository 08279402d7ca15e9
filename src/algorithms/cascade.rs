//! Layered similarity scorer for ticker search
//!
//! Cheap structural checks (exact, prefix, substring) are tried first and
//! scored confidently; character-set and subsequence checks catch dropped or
//! shuffled letters; edit distance is the expensive fallback and is gated at
//! a 50% floor and discounted so it never outranks a structural match.
//!
//! The first rule that applies decides the score:
//!
//! | Rule | Condition | Score |
//! |------|-----------|-------|
//! | exact | `query == text` | 100 |
//! | prefix | `text` starts with `query` | 95 |
//! | substring | `text` contains `query` | 85 |
//! | char set | every query char occurs in `text` | max(70 ordered / 50 unordered, 0.8 × frequency) |
//! | edit distance | normalized similarity ≥ 50 | similarity × 0.7 |
//! | subsequence | query chars in order | 40 |
//! | frequency | frequency > 60 | frequency × 0.5 |
//! | none | | 0 |

use super::charset::{char_frequency_score, contains_all_chars, is_subsequence};
use super::levenshtein::levenshtein_similarity;
use super::normalize::{normalize_pair, NormalizationMode};
use super::Similarity;

pub const EXACT_SCORE: f64 = 100.0;
pub const PREFIX_SCORE: f64 = 95.0;
pub const SUBSTRING_SCORE: f64 = 85.0;
pub const ORDERED_CHARSET_SCORE: f64 = 70.0;
pub const UNORDERED_CHARSET_SCORE: f64 = 50.0;
pub const SUBSEQUENCE_SCORE: f64 = 40.0;

const CHARSET_FREQUENCY_FACTOR: f64 = 0.8;
const EDIT_SIMILARITY_FLOOR: f64 = 50.0;
const EDIT_SIMILARITY_FACTOR: f64 = 0.7;
const FREQUENCY_FLOOR: f64 = 60.0;
const FREQUENCY_FACTOR: f64 = 0.5;

/// Cascade scorer usable wherever a [`Similarity`] is expected
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeScorer;

impl CascadeScorer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for CascadeScorer {
    fn similarity(&self, query: &str, text: &str) -> f64 {
        cascade_score(query, text)
    }

    fn name(&self) -> &'static str {
        "cascade"
    }
}

/// Score how well `query` matches `text`, case-insensitively.
///
/// Returns 0.0 if either input is empty, otherwise a value in `0.0..=100.0`.
///
/// # Example
/// ```
/// use ticker_search::algorithms::cascade::cascade_score;
///
/// assert_eq!(cascade_score("AAPL", "aapl"), 100.0);
/// assert_eq!(cascade_score("appl", "Apple Inc."), 95.0);
/// assert_eq!(cascade_score("nflx", "Netflix"), 80.0);
/// ```
#[must_use]
pub fn cascade_score(query: &str, text: &str) -> f64 {
    if query.is_empty() || text.is_empty() {
        return 0.0;
    }

    let (query, text) = normalize_pair(query, text, NormalizationMode::Lowercase);

    if query == text {
        return EXACT_SCORE;
    }
    if text.starts_with(&query) {
        return PREFIX_SCORE;
    }
    if text.contains(&query) {
        return SUBSTRING_SCORE;
    }

    if contains_all_chars(&query, &text) {
        let order_score = if is_subsequence(&query, &text) {
            ORDERED_CHARSET_SCORE
        } else {
            UNORDERED_CHARSET_SCORE
        };
        let frequency_score = char_frequency_score(&query, &text) * CHARSET_FREQUENCY_FACTOR;
        return order_score.max(frequency_score);
    }

    let similarity = levenshtein_similarity(&query, &text);
    if similarity >= EDIT_SIMILARITY_FLOOR {
        return similarity * EDIT_SIMILARITY_FACTOR;
    }

    // Unreachable while the char-set rule precedes it (an ordered
    // subsequence always passes the set check); kept so reordering the
    // cascade cannot silently drop the rule.
    if is_subsequence(&query, &text) {
        return SUBSEQUENCE_SCORE;
    }

    let frequency_score = char_frequency_score(&query, &text);
    if frequency_score > FREQUENCY_FLOOR {
        return frequency_score * FREQUENCY_FACTOR;
    }

    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(cascade_score("", "apple"), 0.0);
        assert_eq!(cascade_score("apple", ""), 0.0);
        assert_eq!(cascade_score("", ""), 0.0);
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        for text in ["AAPL", "Apple Inc.", "테슬라", "x"] {
            assert_eq!(cascade_score(text, text), EXACT_SCORE);
            assert_eq!(cascade_score(&text.to_lowercase(), &text.to_uppercase()), EXACT_SCORE);
        }
    }

    #[test]
    fn test_prefix_match() {
        assert_eq!(cascade_score("appl", "Apple Inc."), PREFIX_SCORE);
        assert_eq!(cascade_score("MS", "msft"), PREFIX_SCORE);
        assert_eq!(cascade_score("테슬", "테슬라"), PREFIX_SCORE);
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(cascade_score("inc", "Apple Inc."), SUBSTRING_SCORE);
        assert_eq!(cascade_score("슬라", "테슬라"), SUBSTRING_SCORE);
    }

    #[test]
    fn test_ordered_charset_prefers_frequency_when_higher() {
        // Ordered (70) vs 0.8 * 100 frequency (80)
        assert!(approx_eq(cascade_score("nflx", "Netflix"), 80.0));
    }

    #[test]
    fn test_unordered_charset() {
        // 'aapl' lacks a second 'p': unordered (50) vs 0.8 * 75 (60)
        assert!(approx_eq(cascade_score("appl", "AAPL"), 60.0));
        // a:min(3,1) + b:1 = 2/4 -> 0.8 * 50 = 40 loses to the unordered 50
        assert!(approx_eq(cascade_score("aaab", "ba"), UNORDERED_CHARSET_SCORE));
    }

    #[test]
    fn test_edit_distance_fallback() {
        // 'q' missing from text, one substitution out of five chars
        assert!(approx_eq(cascade_score("teslq", "Tesla"), 80.0 * 0.7));
    }

    #[test]
    fn test_frequency_fallback() {
        // 4 of 5 chars available, edit similarity far below the floor
        assert!(approx_eq(cascade_score("abcdz", "dcbaxxxxxx"), 80.0 * 0.5));
    }

    #[test]
    fn test_unrelated_scores_zero() {
        assert_eq!(cascade_score("xyz", "apple"), 0.0);
        assert_eq!(cascade_score("appl", "msft"), 0.0);
        assert_eq!(cascade_score("appl", "Microsoft Corp."), 0.0);
    }

    #[test]
    fn test_scorer_trait() {
        let scorer = CascadeScorer::new();
        assert_eq!(scorer.similarity("aapl", "AAPL"), EXACT_SCORE);
        assert_eq!(scorer.name(), "cascade");
    }
}
