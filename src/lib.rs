//! ticker-search - fuzzy stock lookup for portfolio comparison
//!
//! Ranks a static stock catalog against free-text queries (ticker symbols,
//! English company names, Korean company names) and tracks the user's
//! selection until it is handed off to a report service.
//!
//! # Features
//! - Layered similarity scoring tolerant of typos and dropped letters
//! - Script-aware field weighting for Korean queries
//! - Bounded, deduplicated selection with a configurable submit gate
//! - Report request building and report payload parsing
//!
//! # Example
//!
//! ```rust
//! use ticker_search::catalog::{Catalog, Stock};
//! use ticker_search::config::PickerConfig;
//! use ticker_search::selection::StockPicker;
//!
//! let catalog = Catalog::builder()
//!     .add_stock(Stock::new("AAPL", "Apple Inc."))
//!     .add_stock(Stock::new("TSLA", "Tesla Inc."))
//!     .add_korean_name("TSLA", "테슬라")
//!     .build();
//!
//! let mut picker = StockPicker::new(&catalog, &PickerConfig::default());
//! picker.set_query("테슬");
//! let tesla = picker.suggestions()[0];
//! assert!(picker.add(tesla));
//!
//! let request = picker.submit().unwrap();
//! assert_eq!(request.stocks_param(), "TSLA");
//! ```

pub mod algorithms;
pub mod catalog;
pub mod config;
pub mod ranking;
pub mod report;
pub mod selection;

pub use algorithms::{cascade_score, CascadeScorer, EditDistance, Similarity};
pub use catalog::{Catalog, CatalogError, Stock};
pub use config::{ConfigError, PickerConfig};
pub use ranking::{rank, Ranker, ScoredCandidate, SearchOptions};
pub use report::{PayloadError, ReportError, ReportPayload, ReportRequest};
pub use selection::{SelectedStock, Selection, SelectionConfig, StockPicker, SubmitGate};

/// Score `query` against one text (see [`algorithms::cascade`])
pub fn score(query: &str, text: &str) -> f64 {
    cascade_score(query, text)
}
