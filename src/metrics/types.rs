//! Data types used by the metrics aggregation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the fundamentals dataset.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MetricSample {
    pub metric_key: String,
    /// Network identifier, e.g. `optimism` or `base`.
    pub origin_key: String,
    pub date: NaiveDate,
    /// `null` in the dataset for days a network did not report.
    pub value: Option<f64>,
}

/// Either a captured value or the message of the failure that prevented it.
///
/// Serialized untagged, so the JSON is `{"value":..,"timestamp":..}` or
/// `{"error":..}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MetricResult {
    Value {
        value: f64,
        /// Capture time, Unix epoch milliseconds.
        timestamp: i64,
    },
    Error {
        error: String,
    },
}

impl MetricResult {
    pub fn value(&self) -> Option<f64> {
        match self {
            MetricResult::Value { value, .. } => Some(*value),
            MetricResult::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MetricResult::Value { .. } => None,
            MetricResult::Error { error } => Some(error),
        }
    }
}

/// Output of [`fetch_aggregate_metrics`](crate::metrics::fetch_aggregate_metrics).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateMetrics {
    pub tx_count: MetricResult,
    pub tx_costs_median_usd: MetricResult,
}

/// Summary of the weighted-cost reduction over one day of samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedCost {
    pub date: NaiveDate,
    pub total_count: f64,
    pub weighted_average: f64,
    /// Networks that had both a cost and a count sample.
    pub networks: usize,
}
