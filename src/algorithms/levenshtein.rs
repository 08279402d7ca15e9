//! Levenshtein (edit) distance implementation
//!
//! Classic dynamic programming with unit cost for insertion, deletion and
//! substitution. Characters are compared as Unicode scalar values so Hangul
//! syllables count as one unit each.
//!
//! # Complexity
//! - Time: O(m*n) where m and n are string lengths
//! - Space: O(min(m,n)) using single-row DP optimization

use super::EditDistance;
use smallvec::SmallVec;

/// Single-row DP distance over char slices
#[inline]
fn dp_distance(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Ensure shorter string is on the column axis
    let (target, source) = if m < n { (a, b) } else { (b, a) };
    let n_target = target.len();

    let mut row: SmallVec<[usize; 64]> = (0..=n_target).collect();

    for (i, &sc) in source.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;

        for (j, &tc) in target.iter().enumerate() {
            let cost = usize::from(sc != tc);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            let substitution = prev + cost;

            prev = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[n_target]
}

/// Levenshtein distance calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein(a, b)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Edit distance between two strings, counted in chars
#[inline]
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    dp_distance(&a_chars, &b_chars)
}

/// Normalized similarity percentage: `(1 - distance / max_len) * 100`
///
/// Two empty strings are identical (100.0).
#[inline]
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    let max_len = a_chars.len().max(b_chars.len());
    if max_len == 0 {
        return 100.0;
    }

    let dist = dp_distance(&a_chars, &b_chars);
    (1.0 - dist as f64 / max_len as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
    }

    #[test]
    fn test_levenshtein_unicode() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("테슬라", "테슬"), 1);
        assert_eq!(levenshtein("삼성전자", "삼송전자"), 1);
    }

    #[test]
    fn test_transposition_costs_two() {
        assert_eq!(levenshtein("ab", "ba"), 2);
        assert_eq!(levenshtein("msft", "msfT"), 1);
    }

    #[test]
    fn test_levenshtein_similarity() {
        assert_eq!(levenshtein_similarity("", ""), 100.0);
        assert_eq!(levenshtein_similarity("abc", "abc"), 100.0);
        assert_eq!(levenshtein_similarity("abcd", "abcx"), 75.0);
        assert_eq!(levenshtein_similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_edit_distance_trait() {
        let lev = Levenshtein::new();
        assert_eq!(EditDistance::distance(&lev, "googl", "goog"), 1);
        assert_eq!(EditDistance::similarity(&lev, "abcd", "abcx"), 75.0);
        assert_eq!(EditDistance::name(&lev), "levenshtein");
    }
}
