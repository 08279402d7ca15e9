//! Field weighting for combining per-field scores
//!
//! A stock is scored against three fields (symbol, English name, Korean
//! name). Each raw field score is multiplied by a field weight and the best
//! weighted score becomes the candidate's combined score. Which weight set
//! applies depends on the query's script.

use super::script::QueryScript;
use serde::{Deserialize, Serialize};

/// The searchable fields of a stock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockField {
    Symbol,
    Name,
    Localized,
}

impl StockField {
    pub fn name(&self) -> &'static str {
        match self {
            StockField::Symbol => "symbol",
            StockField::Name => "name",
            StockField::Localized => "localized",
        }
    }
}

/// Multipliers applied to each field's raw score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldWeights {
    pub symbol: f64,
    pub name: f64,
    pub localized: f64,
}

impl FieldWeights {
    /// Weights for queries without Hangul: symbols are short, so a symbol
    /// hit is boosted; Korean names are a weak signal.
    pub const GENERAL: FieldWeights = FieldWeights {
        symbol: 1.1,
        name: 1.0,
        localized: 0.6,
    };

    /// Weights for Hangul queries: the Korean name dominates.
    pub const KOREAN: FieldWeights = FieldWeights {
        symbol: 0.5,
        name: 0.7,
        localized: 1.2,
    };

    pub fn weight(&self, field: StockField) -> f64 {
        match field {
            StockField::Symbol => self.symbol,
            StockField::Name => self.name,
            StockField::Localized => self.localized,
        }
    }

    /// Pair raw field scores with this weight set
    pub fn field_scores(&self, symbol: f64, name: f64, localized: f64) -> [FieldScore; 3] {
        [
            FieldScore::new(StockField::Symbol, symbol, self.weight(StockField::Symbol)),
            FieldScore::new(StockField::Name, name, self.weight(StockField::Name)),
            FieldScore::new(
                StockField::Localized,
                localized,
                self.weight(StockField::Localized),
            ),
        ]
    }
}

/// Both weight sets, selected by query script
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightingPolicy {
    pub general: FieldWeights,
    pub korean: FieldWeights,
}

impl Default for WeightingPolicy {
    fn default() -> Self {
        Self {
            general: FieldWeights::GENERAL,
            korean: FieldWeights::KOREAN,
        }
    }
}

impl WeightingPolicy {
    pub fn for_script(&self, script: QueryScript) -> &FieldWeights {
        match script {
            QueryScript::Korean => &self.korean,
            QueryScript::General => &self.general,
        }
    }
}

/// Individual field score with its weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldScore {
    pub field: StockField,

    /// Raw similarity score (0.0 - 100.0)
    pub score: f64,

    pub weight: f64,
}

impl FieldScore {
    pub fn new(field: StockField, score: f64, weight: f64) -> Self {
        Self {
            field,
            score,
            weight,
        }
    }

    /// Get the weighted score (score × weight)
    pub fn weighted_score(&self) -> f64 {
        self.score * self.weight
    }
}

/// Combine field scores by taking the best weighted score
///
/// Returns the winning field alongside the combined score; the first field
/// wins ties. Empty input combines to `(Symbol, 0.0)`.
pub fn combine_best(field_scores: &[FieldScore]) -> (StockField, f64) {
    field_scores
        .iter()
        .fold((StockField::Symbol, 0.0), |best, fs| {
            let weighted = fs.weighted_score();
            if weighted > best.1 {
                (fs.field, weighted)
            } else {
                best
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_score() {
        let score = FieldScore::new(StockField::Symbol, 80.0, 1.1);
        assert!((score.weighted_score() - 88.0).abs() < 1e-9);
    }

    #[test]
    fn test_weight_lookup_by_field() {
        assert_eq!(FieldWeights::KOREAN.weight(StockField::Symbol), 0.5);
        assert_eq!(FieldWeights::KOREAN.weight(StockField::Localized), 1.2);
        assert_eq!(FieldWeights::GENERAL.weight(StockField::Name), 1.0);
        assert_eq!(StockField::Localized.name(), "localized");
    }

    #[test]
    fn test_combine_best_general() {
        let scores = FieldWeights::GENERAL.field_scores(100.0, 80.0, 0.0);
        let (field, combined) = combine_best(&scores);
        assert_eq!(field, StockField::Symbol);
        assert!((combined - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_combine_best_korean() {
        let scores = FieldWeights::KOREAN.field_scores(0.0, 0.0, 95.0);
        let (field, combined) = combine_best(&scores);
        assert_eq!(field, StockField::Localized);
        assert!((combined - 114.0).abs() < 1e-9);
    }

    #[test]
    fn test_combine_best_empty_and_zero() {
        assert_eq!(combine_best(&[]), (StockField::Symbol, 0.0));
        let scores = FieldWeights::GENERAL.field_scores(0.0, 0.0, 0.0);
        assert_eq!(combine_best(&scores), (StockField::Symbol, 0.0));
    }

    #[test]
    fn test_policy_for_script() {
        let policy = WeightingPolicy::default();
        assert_eq!(policy.for_script(QueryScript::Korean), &FieldWeights::KOREAN);
        assert_eq!(policy.for_script(QueryScript::General), &FieldWeights::GENERAL);
    }

    #[test]
    fn test_policy_deserialize_partial() {
        let policy: WeightingPolicy =
            serde_json::from_str(r#"{"general": {"symbol": 1.05, "name": 1.0, "localized": 0.6}}"#)
                .expect("deserialize");
        assert_eq!(policy.general.symbol, 1.05);
        assert_eq!(policy.korean, FieldWeights::KOREAN);
    }
}
