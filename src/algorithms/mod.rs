//! Core string similarity algorithms
//!
//! Each algorithm is implemented as a standalone function for composability,
//! plus a trait-based interface so rankers can swap scorers.
//!
//! Scores in this crate are percentages: 0.0 means unrelated and 100.0 is an
//! exact match. Layered scorers may emit values above 100 once the caller
//! applies field weights.

pub mod cascade;
pub mod charset;
pub mod levenshtein;
pub mod normalize;

pub use cascade::*;
pub use charset::*;
pub use levenshtein::*;

/// Trait for all similarity metrics.
/// Returns a non-negative score, higher meaning more similar.
pub trait Similarity: Send + Sync {
    fn similarity(&self, query: &str, text: &str) -> f64;

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}

/// Trait for edit distance algorithms that return integer distances
pub trait EditDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Convert to a normalized similarity percentage (0.0 to 100.0)
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let dist = self.distance(a, b);
        let max_len = a.chars().count().max(b.chars().count());
        if max_len == 0 {
            100.0
        } else {
            (1.0 - dist as f64 / max_len as f64) * 100.0
        }
    }

    fn name(&self) -> &'static str;
}

/// Blanket implementation: any EditDistance is also a Similarity
impl<T: EditDistance> Similarity for T {
    fn similarity(&self, query: &str, text: &str) -> f64 {
        EditDistance::similarity(self, query, text)
    }

    fn name(&self) -> &'static str {
        EditDistance::name(self)
    }
}
