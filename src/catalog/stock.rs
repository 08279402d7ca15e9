//! Stock records and the immutable catalog built from them

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Longest ticker symbol accepted into a catalog, in chars
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// A catalog entry
///
/// `symbol` is the unique key within a catalog. `kr_name` is only present
/// for the subset of stocks that have a Korean company name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stock {
    pub symbol: String,
    pub name: String,
    #[serde(rename = "krName", default, skip_serializing_if = "Option::is_none")]
    pub kr_name: Option<String>,
}

impl Stock {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            kr_name: None,
        }
    }

    /// Builder: attach a Korean company name
    pub fn with_kr_name(mut self, kr_name: impl Into<String>) -> Self {
        self.kr_name = Some(kr_name.into());
        self
    }

    pub fn kr_name(&self) -> Option<&str> {
        self.kr_name.as_deref()
    }
}

/// Immutable, symbol-indexed list of stocks
///
/// Built once through [`CatalogBuilder`]; search and selection only ever
/// borrow from it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Stocks in listing order (ranking ties resolve to this order)
    stocks: Vec<Stock>,

    /// Symbol -> index mapping for O(1) lookup
    symbol_map: AHashMap<String, usize>,
}

impl Catalog {
    /// Create a new catalog builder
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stock> {
        self.stocks.iter()
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Look up a stock by its exact symbol
    pub fn get(&self, symbol: &str) -> Option<&Stock> {
        self.symbol_map.get(symbol).map(|&idx| &self.stocks[idx])
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbol_map.contains_key(symbol)
    }

    /// Number of stocks carrying a Korean name
    pub fn localized_count(&self) -> usize {
        self.stocks.iter().filter(|s| s.kr_name.is_some()).count()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Stock;
    type IntoIter = std::slice::Iter<'a, Stock>;

    fn into_iter(self) -> Self::IntoIter {
        self.stocks.iter()
    }
}

/// Builder for [`Catalog`]
///
/// Entries with an empty symbol or name, or a symbol longer than
/// [`MAX_SYMBOL_LENGTH`], are skipped. Duplicate symbols keep the first
/// occurrence. Korean names are joined by symbol and only fill stocks that
/// do not already carry one.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    stocks: Vec<Stock>,
    korean_names: AHashMap<String, String>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stock(mut self, stock: Stock) -> Self {
        self.stocks.push(stock);
        self
    }

    pub fn add_stocks(mut self, stocks: impl IntoIterator<Item = Stock>) -> Self {
        self.stocks.extend(stocks);
        self
    }

    pub fn add_korean_name(mut self, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        self.korean_names.insert(symbol.into(), name.into());
        self
    }

    pub fn with_korean_names(mut self, names: AHashMap<String, String>) -> Self {
        self.korean_names.extend(names);
        self
    }

    /// Build the catalog
    pub fn build(self) -> Catalog {
        let mut stocks = Vec::with_capacity(self.stocks.len());
        let mut symbol_map = AHashMap::with_capacity(self.stocks.len());
        let mut skipped = 0usize;

        for stock in self.stocks {
            let symbol = stock.symbol.trim();
            let name = stock.name.trim();

            if symbol.is_empty() || name.is_empty() {
                tracing::warn!(symbol, name, "skipping catalog entry with empty field");
                skipped += 1;
                continue;
            }
            if symbol.chars().count() > MAX_SYMBOL_LENGTH {
                tracing::warn!(symbol, max = MAX_SYMBOL_LENGTH, "skipping over-long symbol");
                skipped += 1;
                continue;
            }
            if symbol_map.contains_key(symbol) {
                tracing::warn!(symbol, "skipping duplicate symbol");
                skipped += 1;
                continue;
            }

            let kr_name = stock
                .kr_name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .or_else(|| self.korean_names.get(symbol).map(|n| n.trim()))
                .filter(|n| !n.is_empty())
                .map(str::to_string);

            symbol_map.insert(symbol.to_string(), stocks.len());
            stocks.push(Stock {
                symbol: symbol.to_string(),
                name: name.to_string(),
                kr_name,
            });
        }

        let catalog = Catalog { stocks, symbol_map };
        tracing::info!(
            stocks = catalog.len(),
            localized = catalog.localized_count(),
            skipped,
            "catalog built"
        );
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_keeps_listing_order() {
        let catalog = Catalog::builder()
            .add_stock(Stock::new("MSFT", "Microsoft Corp."))
            .add_stock(Stock::new("AAPL", "Apple Inc."))
            .build();

        let symbols: Vec<&str> = catalog.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["MSFT", "AAPL"]);
        assert_eq!(catalog.get("AAPL").map(|s| s.name.as_str()), Some("Apple Inc."));
        assert!(catalog.get("GOOG").is_none());
    }

    #[test]
    fn test_builder_skips_invalid_entries() {
        let catalog = Catalog::builder()
            .add_stock(Stock::new("", "No Symbol"))
            .add_stock(Stock::new("NONAME", "  "))
            .add_stock(Stock::new("WAYTOOLONGSYM", "Long Symbol Corp."))
            .add_stock(Stock::new(" NVDA ", " NVIDIA Corporation "))
            .build();

        assert_eq!(catalog.len(), 1);
        let nvda = catalog.get("NVDA").expect("trimmed symbol");
        assert_eq!(nvda.name, "NVIDIA Corporation");
    }

    #[test]
    fn test_builder_keeps_first_duplicate() {
        let catalog = Catalog::builder()
            .add_stock(Stock::new("GOOG", "Alphabet Inc. Class C"))
            .add_stock(Stock::new("GOOG", "Duplicate"))
            .build();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("GOOG").map(|s| s.name.as_str()), Some("Alphabet Inc. Class C"));
    }

    #[test]
    fn test_korean_names_join_by_symbol() {
        let catalog = Catalog::builder()
            .add_stocks([
                Stock::new("TSLA", "Tesla Inc."),
                Stock::new("AAPL", "Apple Inc.").with_kr_name("애플"),
                Stock::new("AMZN", "Amazon.com Inc."),
            ])
            .add_korean_name("TSLA", "테슬라")
            .add_korean_name("AAPL", "사과")
            .add_korean_name("ZZZZ", "없음")
            .build();

        assert_eq!(catalog.get("TSLA").and_then(Stock::kr_name), Some("테슬라"));
        // existing names are not overwritten by the side table
        assert_eq!(catalog.get("AAPL").and_then(Stock::kr_name), Some("애플"));
        assert_eq!(catalog.get("AMZN").and_then(Stock::kr_name), None);
        assert_eq!(catalog.localized_count(), 2);
    }

    #[test]
    fn test_stock_serde_uses_kr_name_key() {
        let stock = Stock::new("TSLA", "Tesla Inc.").with_kr_name("테슬라");
        let json = serde_json::to_string(&stock).expect("serialize");
        assert_eq!(json, r#"{"symbol":"TSLA","name":"Tesla Inc.","krName":"테슬라"}"#);

        let plain: Stock = serde_json::from_str(r#"{"symbol":"MSFT","name":"Microsoft"}"#)
            .expect("deserialize");
        assert_eq!(plain.kr_name, None);
    }
}
