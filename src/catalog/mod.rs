//! Static stock catalog
//!
//! The catalog is the fixed list of candidates the ranker searches. It is
//! built once from an external listing (JSON or tab-separated text) plus an
//! optional Korean-name side table joined by symbol, and is never mutated
//! afterwards.
//!
//! # Example
//!
//! ```rust
//! use ticker_search::catalog::*;
//!
//! let catalog = Catalog::builder()
//!     .add_stock(Stock::new("TSLA", "Tesla Inc."))
//!     .add_korean_name("TSLA", "테슬라")
//!     .build();
//!
//! assert_eq!(catalog.get("TSLA").and_then(|s| s.kr_name()), Some("테슬라"));
//! ```

pub mod loader;
pub mod stock;

pub use loader::{parse_korean_names, parse_stock_json, parse_stock_tsv, CatalogFormat};
pub use stock::{Catalog, CatalogBuilder, Stock, MAX_SYMBOL_LENGTH};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog or side-table file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON listing did not match the expected record layout
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Tab-separated line without a symbol/name pair
    #[error("Malformed catalog line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },
}
