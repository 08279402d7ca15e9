//! Catalog ranking
//!
//! - Script detection: Hangul queries switch to localized-name weighting
//! - Field weights: per-field multipliers combined by best weighted score
//! - Ranker: threshold, stable sort and truncation over a stock slice

pub mod ranker;
pub mod script;
pub mod weights;

pub use ranker::{rank, Ranker, ScoredCandidate, SearchOptions, DEFAULT_LIMIT, DEFAULT_MIN_SCORE};
pub use script::{contains_hangul, is_hangul, QueryScript};
pub use weights::{combine_best, FieldScore, FieldWeights, StockField, WeightingPolicy};
