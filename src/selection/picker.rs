//! Stock picker controller
//!
//! Ties the query box, the ranked dropdown and the selection together for
//! one page visit. The UI layer forwards keystrokes and clicks and renders
//! whatever the picker returns.

use super::{Selection, SelectionConfig};
use crate::catalog::{Catalog, Stock};
use crate::config::PickerConfig;
use crate::ranking::{Ranker, ScoredCandidate, SearchOptions};
use crate::report::ReportRequest;

/// Search-and-select state for a single picking session
#[derive(Debug, Clone)]
pub struct StockPicker<'c> {
    catalog: &'c Catalog,
    ranker: Ranker,
    query: String,
    selection: Selection,
}

impl<'c> StockPicker<'c> {
    pub fn new(catalog: &'c Catalog, config: &PickerConfig) -> Self {
        Self::with_parts(catalog, config.search.clone(), config.selection.clone())
    }

    pub fn with_parts(catalog: &'c Catalog, search: SearchOptions, selection: SelectionConfig) -> Self {
        Self {
            catalog,
            ranker: Ranker::new(search),
            query: String::new(),
            selection: Selection::new(selection),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query.clear();
        self.query.push_str(query);
    }

    /// Ranked dropdown entries for the current query
    pub fn suggestions(&self) -> Vec<&'c Stock> {
        self.ranker.rank(&self.query, self.catalog.stocks())
    }

    /// Ranked dropdown entries with their scores
    pub fn scored_suggestions(&self) -> Vec<ScoredCandidate<'c>> {
        self.ranker.rank_scored(&self.query, self.catalog.stocks())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Add `stock` to the selection; clears the query when it was added
    pub fn add(&mut self, stock: &Stock) -> bool {
        if !self.selection.add(stock) {
            return false;
        }
        self.query.clear();
        true
    }

    /// Add the catalog stock with `symbol`; unknown symbols are ignored
    pub fn add_symbol(&mut self, symbol: &str) -> bool {
        match self.catalog.get(symbol) {
            Some(stock) => self.add(stock),
            None => {
                tracing::debug!(symbol, "symbol not in catalog");
                false
            }
        }
    }

    pub fn remove(&mut self, symbol: &str) -> bool {
        self.selection.remove(symbol)
    }

    pub fn can_submit(&self) -> bool {
        self.selection.can_submit()
    }

    /// Hand the selection off as a report request and start over
    ///
    /// Returns `None`, leaving the state untouched, when the submit gate is
    /// closed or the selection cannot form a valid request (it is empty).
    pub fn submit(&mut self) -> Option<ReportRequest> {
        if !self.can_submit() {
            return None;
        }
        match ReportRequest::new(self.selection.symbols()) {
            Ok(request) => {
                tracing::info!(stocks = %request.stocks_param(), "selection submitted");
                self.selection.clear();
                self.query.clear();
                Some(request)
            }
            Err(err) => {
                tracing::debug!(error = %err, "submit refused");
                None
            }
        }
    }
}
