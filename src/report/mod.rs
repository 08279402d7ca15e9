//! Report handoff
//!
//! A confirmed selection becomes a [`ReportRequest`] for the external
//! analytics service; its answer is modelled by [`ReportPayload`].

pub mod payload;
pub mod request;

pub use payload::{ChartSeries, DateRange, HeatmapRow, MetricPair, Metrics, ReportPayload};
pub use request::{ReportRequest, ANALYZE_PATH, DEFAULT_PERIOD, MAX_REPORT_SYMBOLS};

use thiserror::Error;

/// Errors building a report request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    #[error("At least one stock ticker is required")]
    NoSymbols,

    #[error("Maximum {max} stocks allowed, got {count}")]
    TooManySymbols { count: usize, max: usize },

    #[error("Duplicate stock ticker: {0}")]
    DuplicateSymbol(String),

    #[error("Invalid report URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Errors reading a report payload
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Invalid report JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Chart '{chart}' has {labels} labels but {portfolio} portfolio and {benchmark} benchmark values")]
    SeriesLengthMismatch {
        chart: &'static str,
        labels: usize,
        portfolio: usize,
        benchmark: usize,
    },
}
