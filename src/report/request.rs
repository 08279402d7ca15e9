//! Report-generation request
//!
//! The analytics service is keyed by a comma-joined ticker list plus a
//! lookback period and an optional start date.

use super::ReportError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Most tickers the analytics service accepts per request
pub const MAX_REPORT_SYMBOLS: usize = 5;

/// Lookback period used when none is given
pub const DEFAULT_PERIOD: &str = "10y";

/// Path of the analyze endpoint, relative to the service base URL
pub const ANALYZE_PATH: &str = "api/portfolio/analyze";

/// A validated request for a portfolio report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    symbols: Vec<String>,
    period: String,
    start_date: Option<String>,
}

impl ReportRequest {
    /// Build a request from selected symbols
    ///
    /// Symbols must be non-empty, pairwise distinct and at most
    /// [`MAX_REPORT_SYMBOLS`].
    pub fn new(symbols: Vec<String>) -> Result<Self, ReportError> {
        if symbols.is_empty() {
            return Err(ReportError::NoSymbols);
        }
        if symbols.len() > MAX_REPORT_SYMBOLS {
            return Err(ReportError::TooManySymbols {
                count: symbols.len(),
                max: MAX_REPORT_SYMBOLS,
            });
        }
        for (idx, symbol) in symbols.iter().enumerate() {
            if symbols[..idx].contains(symbol) {
                return Err(ReportError::DuplicateSymbol(symbol.clone()));
            }
        }

        Ok(Self {
            symbols,
            period: DEFAULT_PERIOD.to_string(),
            start_date: None,
        })
    }

    /// Parse a comma-separated ticker list the way the analytics service
    /// does: split on commas, trim, uppercase, drop empty entries.
    ///
    /// The ticker limit counts every parsed entry, repeats included.
    pub fn from_stocks_param(param: &str) -> Result<Self, ReportError> {
        let symbols: Vec<String> = param
            .split(',')
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self::new(symbols)
    }

    /// Builder: set the lookback period (e.g. "10y", "5y", "1y")
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }

    /// Builder: set a start date (YYYY-MM-DD); overrides the period
    /// on the service side
    pub fn with_start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }

    /// The comma-joined ticker list
    pub fn stocks_param(&self) -> String {
        self.symbols.join(",")
    }

    /// Full analyze URL under `base`
    ///
    /// `base` should end with a slash; a trailing path segment without one
    /// is replaced, as with any relative URL resolution.
    pub fn endpoint_url(&self, base: &Url) -> Result<Url, ReportError> {
        let mut url = base.join(ANALYZE_PATH)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("stocks", &self.stocks_param());
            pairs.append_pair("period", &self.period);
            if let Some(start_date) = &self.start_date {
                pairs.append_pair("start_date", start_date);
            }
        }
        Ok(url)
    }
}
