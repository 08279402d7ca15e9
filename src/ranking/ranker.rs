//! Catalog ranker
//!
//! Scores every stock against the query on each field, combines the field
//! scores with the script-dependent weights, drops weak candidates and
//! returns the best few, highest first.

use super::script::QueryScript;
use super::weights::{combine_best, FieldWeights, StockField, WeightingPolicy};
use crate::algorithms::normalize::{normalize_string, NormalizationMode};
use crate::algorithms::{CascadeScorer, Similarity};
use crate::catalog::Stock;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Default maximum number of ranked results
pub const DEFAULT_LIMIT: usize = 10;

/// Default score a candidate must exceed to be kept
pub const DEFAULT_MIN_SCORE: f64 = 25.0;

/// Minimum catalog size for parallel scoring.
///
/// Below this, sequential scoring is faster than thread pool coordination
/// for per-keystroke queries.
const PARALLEL_THRESHOLD: usize = 2_000;

/// Search options for ranking passes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Maximum number of results to return
    pub limit: usize,

    /// Candidates whose combined score is at or below this are dropped
    pub min_score: f64,

    /// Field weights per query script
    pub weights: WeightingPolicy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            min_score: DEFAULT_MIN_SCORE,
            weights: WeightingPolicy::default(),
        }
    }
}

impl SearchOptions {
    /// Set the result limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the minimum combined score
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_weights(mut self, weights: WeightingPolicy) -> Self {
        self.weights = weights;
        self
    }
}

/// A stock that survived a ranking pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub stock: &'a Stock,

    /// Combined (weighted) score
    pub score: f64,

    /// Field that produced the combined score
    pub field: StockField,

    /// Position of the stock in the searched slice
    pub position: usize,
}

/// Ranks stocks against free-text queries
///
/// Generic over the per-field scorer; the default is the layered
/// [`CascadeScorer`].
///
/// # Example
///
/// ```rust
/// use ticker_search::catalog::Stock;
/// use ticker_search::ranking::{Ranker, SearchOptions};
///
/// let stocks = vec![
///     Stock::new("AAPL", "Apple Inc."),
///     Stock::new("MSFT", "Microsoft Corp."),
/// ];
/// let ranker = Ranker::new(SearchOptions::default());
/// let results = ranker.rank("appl", &stocks);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].symbol, "AAPL");
/// ```
#[derive(Debug, Clone)]
pub struct Ranker<S = CascadeScorer> {
    scorer: S,
    options: SearchOptions,
}

impl Ranker<CascadeScorer> {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            scorer: CascadeScorer,
            options,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(SearchOptions::default())
    }
}

impl<S: Similarity> Ranker<S> {
    pub fn with_scorer(scorer: S, options: SearchOptions) -> Self {
        Self { scorer, options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Rank `stocks` against `query`, returning at most `limit` stocks
    pub fn rank<'a>(&self, query: &str, stocks: &'a [Stock]) -> Vec<&'a Stock> {
        self.rank_scored(query, stocks)
            .into_iter()
            .map(|c| c.stock)
            .collect()
    }

    /// Rank `stocks` against `query`, keeping the scores
    ///
    /// Results are ordered by combined score, highest first; equal scores
    /// keep their order in `stocks`. A query that is empty after trimming
    /// yields no results.
    pub fn rank_scored<'a>(&self, query: &str, stocks: &'a [Stock]) -> Vec<ScoredCandidate<'a>> {
        let query = normalize_string(query, NormalizationMode::Trim);
        if query.is_empty() || self.options.limit == 0 {
            return Vec::new();
        }

        let script = QueryScript::detect(&query);
        let weights = self.options.weights.for_script(script);

        let mut candidates: Vec<ScoredCandidate<'a>> = if stocks.len() >= PARALLEL_THRESHOLD {
            stocks
                .par_iter()
                .enumerate()
                .filter_map(|(position, stock)| self.score_stock(&query, weights, position, stock))
                .collect()
        } else {
            stocks
                .iter()
                .enumerate()
                .filter_map(|(position, stock)| self.score_stock(&query, weights, position, stock))
                .collect()
        };

        candidates.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.position.cmp(&b.position))
        });
        candidates.truncate(self.options.limit);

        tracing::debug!(
            query = %query,
            script = script.name(),
            scorer = self.scorer.name(),
            candidates = stocks.len(),
            hits = candidates.len(),
            top = candidates.first().map(|c| c.stock.symbol.as_str()),
            top_field = candidates.first().map(|c| c.field.name()),
            "ranked catalog"
        );

        candidates
    }

    fn score_stock<'a>(
        &self,
        query: &str,
        weights: &FieldWeights,
        position: usize,
        stock: &'a Stock,
    ) -> Option<ScoredCandidate<'a>> {
        let symbol_score = self.scorer.similarity(query, &stock.symbol);
        let name_score = self.scorer.similarity(query, &stock.name);
        let localized_score = stock
            .kr_name()
            .map_or(0.0, |kr| self.scorer.similarity(query, kr));

        let field_scores = weights.field_scores(symbol_score, name_score, localized_score);
        let (field, score) = combine_best(&field_scores);

        if score > self.options.min_score {
            Some(ScoredCandidate {
                stock,
                score,
                field,
                position,
            })
        } else {
            None
        }
    }
}

/// Rank `stocks` against `query` with the default options
pub fn rank<'a>(query: &str, stocks: &'a [Stock]) -> Vec<&'a Stock> {
    Ranker::new(SearchOptions::default()).rank(query, stocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Levenshtein;
    use pretty_assertions::assert_eq;

    fn sample_stocks() -> Vec<Stock> {
        vec![
            Stock::new("AAPL", "Apple Inc.").with_kr_name("애플"),
            Stock::new("MSFT", "Microsoft Corp.").with_kr_name("마이크로소프트"),
            Stock::new("NFLX", "Netflix, Inc.").with_kr_name("넷플릭스"),
            Stock::new("TSLA", "Tesla Inc.").with_kr_name("테슬라"),
            Stock::new("NVDA", "NVIDIA Corporation"),
            Stock::new("AMZN", "Amazon.com, Inc."),
        ]
    }

    fn symbols(stocks: &[&Stock]) -> Vec<String> {
        stocks.iter().map(|s| s.symbol.clone()).collect()
    }

    #[test]
    fn test_prefix_name_match_filters_unrelated() {
        let stocks = vec![
            Stock::new("AAPL", "Apple Inc."),
            Stock::new("MSFT", "Microsoft Corp."),
        ];
        let scored = Ranker::new(SearchOptions::default()).rank_scored("appl", &stocks);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].stock.symbol, "AAPL");
        assert_eq!(scored[0].field, StockField::Name);
        assert_eq!(scored[0].score, 95.0);
    }

    #[test]
    fn test_korean_query_uses_localized_weights() {
        let stocks = vec![Stock::new("TSLA", "Tesla Inc.").with_kr_name("테슬라")];
        let scored = Ranker::new(SearchOptions::default()).rank_scored("테슬", &stocks);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].field, StockField::Localized);
        assert!((scored[0].score - 95.0 * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_exact_symbol_outranks_fuzzy_name() {
        let stocks = vec![
            Stock::new("NTFX", "Netflix Lookalike Holdings"),
            Stock::new("NFLX", "Netflix, Inc."),
        ];
        let scored = Ranker::new(SearchOptions::default()).rank_scored("nflx", &stocks);
        assert_eq!(scored[0].stock.symbol, "NFLX");
        assert!(scored.iter().all(|c| c.score > DEFAULT_MIN_SCORE));
        // fuzzy name hit still clears the threshold on its own
        assert!(scored.iter().any(|c| c.stock.symbol == "NTFX"));
    }

    #[test]
    fn test_whitespace_query_is_empty() {
        let stocks = sample_stocks();
        assert!(rank("   ", &stocks).is_empty());
        assert!(rank("", &stocks).is_empty());
        assert!(rank("\t\n", &stocks).is_empty());
    }

    #[test]
    fn test_query_is_trimmed() {
        let stocks = sample_stocks();
        assert_eq!(symbols(&rank("  tsla  ", &stocks))[0], "TSLA");
    }

    #[test]
    fn test_empty_catalog() {
        assert!(rank("aapl", &[]).is_empty());
    }

    #[test]
    fn test_limit_and_threshold_hold() {
        let stocks: Vec<Stock> = (0..40)
            .map(|i| Stock::new(format!("AB{i}"), format!("Alpha Beta {i}")))
            .collect();
        let scored = Ranker::new(SearchOptions::default()).rank_scored("ab", &stocks);
        assert_eq!(scored.len(), DEFAULT_LIMIT);
        assert!(scored.iter().all(|c| c.score > DEFAULT_MIN_SCORE));
        assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_score_at_threshold_is_dropped() {
        let stocks = vec![Stock::new("XYZ", "Unrelated Holdings")];
        let weights = WeightingPolicy {
            general: FieldWeights {
                symbol: 0.25,
                ..FieldWeights::GENERAL
            },
            ..WeightingPolicy::default()
        };

        // exact symbol hit weighs in at exactly 100 * 0.25
        let at_threshold = Ranker::new(SearchOptions::default().with_weights(weights));
        assert!(at_threshold.rank_scored("xyz", &stocks).is_empty());

        let just_below = Ranker::new(
            SearchOptions::default()
                .with_weights(weights)
                .with_min_score(24.9),
        );
        let scored = just_below.rank_scored("xyz", &stocks);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].score, 25.0);
        assert_eq!(scored[0].field, StockField::Symbol);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let stocks = vec![
            Stock::new("ABC1", "Gamma"),
            Stock::new("ABC2", "Delta"),
            Stock::new("ABC3", "Epsilon"),
        ];
        let ranked = rank("abc", &stocks);
        assert_eq!(symbols(&ranked), vec!["ABC1", "ABC2", "ABC3"]);
    }

    #[test]
    fn test_missing_localized_name_scores_zero() {
        let stocks = vec![Stock::new("NVDA", "NVIDIA Corporation")];
        assert!(rank("엔비디아", &stocks).is_empty());
    }

    #[test]
    fn test_custom_options() {
        let stocks = sample_stocks();
        let ranker = Ranker::new(SearchOptions::default().with_limit(1).with_min_score(0.0));
        assert_eq!(ranker.rank("a", &stocks).len(), 1);
        assert_eq!(ranker.options().limit, 1);

        let zero = Ranker::new(SearchOptions::default().with_limit(0));
        assert!(zero.rank("aapl", &stocks).is_empty());
    }

    #[test]
    fn test_custom_scorer() {
        let stocks = vec![
            Stock::new("AAPL", "Apple Inc."),
            Stock::new("AAPX", "Apex Holdings"),
        ];
        let ranker = Ranker::with_scorer(Levenshtein::new(), SearchOptions::default());
        // exact 100 * 1.1, then one substitution 75 * 1.1
        assert_eq!(symbols(&ranker.rank("AAPX", &stocks)), vec!["AAPX", "AAPL"]);
    }

    #[test]
    fn test_parallel_path_matches_sequential_order() {
        let mut stocks: Vec<Stock> = (0..PARALLEL_THRESHOLD + 10)
            .map(|i| Stock::new(format!("Z{i}"), format!("Filler Company {i}")))
            .collect();
        stocks.push(Stock::new("TSLA", "Tesla Inc."));
        stocks.push(Stock::new("TSL", "Tesla Lookalike"));

        let ranked = rank("tsla", &stocks);
        assert_eq!(ranked[0].symbol, "TSLA");
        let sequential = rank("tsla", &stocks[stocks.len() - 2..]);
        assert_eq!(symbols(&ranked[..sequential.len()]), symbols(&sequential));
    }
}
