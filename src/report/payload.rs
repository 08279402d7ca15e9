//! Report payload returned by the analytics service
//!
//! The service computes the metrics; this module only models and checks
//! the shape of what comes back.

use super::PayloadError;
use serde::{Deserialize, Serialize};

/// Complete report for one portfolio request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    pub metrics: Metrics,
    pub cumulative_chart: ChartSeries,
    pub volatility_chart: ChartSeries,
    pub heatmap: Vec<HeatmapRow>,

    /// Tickers the service actually found data for
    #[serde(default)]
    pub stocks: Vec<String>,

    /// Covered date range
    pub period: DateRange,
}

impl ReportPayload {
    /// Parse and check a payload
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        let payload: ReportPayload = serde_json::from_str(json)?;
        payload.validate()?;
        Ok(payload)
    }

    /// Check that every chart series has one value per label
    pub fn validate(&self) -> Result<(), PayloadError> {
        self.cumulative_chart.check("cumulativeChart")?;
        self.volatility_chart.check("volatilityChart")?;
        Ok(())
    }
}

/// The four headline metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub cagr: MetricPair,
    pub mdd: MetricPair,
    pub sharpe: MetricPair,
    pub volatility: MetricPair,
}

impl Metrics {
    /// Metrics with their wire names, in display order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &MetricPair)> {
        [
            ("cagr", &self.cagr),
            ("mdd", &self.mdd),
            ("sharpe", &self.sharpe),
            ("volatility", &self.volatility),
        ]
        .into_iter()
    }
}

/// Portfolio value against benchmark value for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPair {
    pub portfolio: f64,
    pub benchmark: f64,

    /// Position on the comparison bar (0-100); above 50 means the
    /// portfolio did better than the benchmark on this metric
    pub percentage: u8,
}

impl MetricPair {
    pub fn beats_benchmark(&self) -> bool {
        self.percentage > 50
    }
}

/// One chart: date labels with portfolio and benchmark values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub portfolio: Vec<f64>,
    pub benchmark: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn check(&self, chart: &'static str) -> Result<(), PayloadError> {
        let labels = self.labels.len();
        if self.portfolio.len() != labels || self.benchmark.len() != labels {
            return Err(PayloadError::SeriesLengthMismatch {
                chart,
                labels,
                portfolio: self.portfolio.len(),
                benchmark: self.benchmark.len(),
            });
        }
        Ok(())
    }
}

/// Monthly returns for one year; `None` for months outside the data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub year: String,
    pub months: [Option<f64>; 12],
}

impl HeatmapRow {
    pub fn observed_months(&self) -> usize {
        self.months.iter().filter(|m| m.is_some()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}
