//! Catalog file formats
//!
//! Two listing formats are understood, both produced by the NASDAQ listing
//! scraper:
//! - JSON: `[{"symbol": "AAPL", "name": "Apple Inc."}, ...]`
//! - Tab-separated text: one `SYMBOL<TAB>Company name` pair per line
//!
//! Korean names come from a separate JSON side table,
//! `[{"symbol": "TSLA", "name_ko": "테슬라"}, ...]`.

use super::stock::{Catalog, Stock};
use super::CatalogError;
use ahash::AHashMap;
use serde::Deserialize;
use std::path::Path;

/// Listing file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Tsv,
}

impl CatalogFormat {
    /// Pick the format from a file extension; anything but `.json` is
    /// treated as tab-separated text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            _ => CatalogFormat::Tsv,
        }
    }
}

#[derive(Debug, Deserialize)]
struct StockRecord {
    symbol: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct KoreanNameRecord {
    symbol: String,
    name_ko: String,
}

/// Parse a JSON listing into stocks
pub fn parse_stock_json(json: &str) -> Result<Vec<Stock>, CatalogError> {
    let records: Vec<StockRecord> = serde_json::from_str(json)?;
    Ok(records
        .into_iter()
        .map(|r| Stock::new(r.symbol, r.name))
        .collect())
}

/// Parse a tab-separated listing into stocks
///
/// Blank lines are ignored. A non-blank line without a tab is an error.
pub fn parse_stock_tsv(text: &str) -> Result<Vec<Stock>, CatalogError> {
    let mut stocks = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (symbol, name) = line.split_once('\t').ok_or_else(|| CatalogError::MalformedLine {
            line: idx + 1,
            content: line.to_string(),
        })?;
        stocks.push(Stock::new(symbol, name));
    }
    Ok(stocks)
}

/// Parse the Korean-name side table into a symbol -> name map
///
/// Later rows win when a symbol repeats.
pub fn parse_korean_names(json: &str) -> Result<AHashMap<String, String>, CatalogError> {
    let records: Vec<KoreanNameRecord> = serde_json::from_str(json)?;
    Ok(records
        .into_iter()
        .map(|r| (r.symbol.trim().to_string(), r.name_ko))
        .collect())
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl Catalog {
    /// Load a catalog listing and an optional Korean-name side table
    pub fn load(listing: &Path, korean_names: Option<&Path>) -> Result<Catalog, CatalogError> {
        let text = read_file(listing)?;
        let stocks = match CatalogFormat::from_path(listing) {
            CatalogFormat::Json => parse_stock_json(&text)?,
            CatalogFormat::Tsv => parse_stock_tsv(&text)?,
        };
        tracing::debug!(path = %listing.display(), records = stocks.len(), "read catalog listing");

        let mut builder = Catalog::builder().add_stocks(stocks);
        if let Some(path) = korean_names {
            let names = parse_korean_names(&read_file(path)?)?;
            tracing::debug!(path = %path.display(), names = names.len(), "read korean names");
            builder = builder.with_korean_names(names);
        }
        Ok(builder.build())
    }
}
