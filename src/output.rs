//! Output formatting and persistence for metrics and curated feeds.
//!
//! Supports JSON logging, JSON files, and a CSV history of metric snapshots.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::path::Path;
use tracing::{debug, info};

use crate::metrics::types::{AggregateMetrics, MetricResult};

/// One CSV row of metric history.
#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub captured_at: DateTime<Utc>,
    pub tx_count: Option<f64>,
    pub tx_costs_median_usd: Option<f64>,
    pub error: Option<String>,
}

impl MetricsSnapshot {
    /// Flattens an [`AggregateMetrics`] into a row. Error results fall back to
    /// the current time.
    pub fn from_metrics(metrics: &AggregateMetrics) -> Self {
        let captured_at = match metrics.tx_count {
            MetricResult::Value { timestamp, .. } => DateTime::from_timestamp_millis(timestamp),
            MetricResult::Error { .. } => None,
        }
        .unwrap_or_else(Utc::now);

        MetricsSnapshot {
            captured_at,
            tx_count: metrics.tx_count.value(),
            tx_costs_median_usd: metrics.tx_costs_median_usd.value(),
            error: metrics
                .tx_count
                .error()
                .or(metrics.tx_costs_median_usd.error())
                .map(str::to_string),
        }
    }
}

/// Logs any serializable value as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes a value as pretty-printed JSON, replacing the file.
pub fn write_json<T: Serialize>(path: &str, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value)?;
    fs::write(path, body).with_context(|| format!("writing {path}"))?;
    debug!(path, "JSON written");
    Ok(())
}

/// Appends a [`MetricsSnapshot`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, snapshot: &MetricsSnapshot) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("opening {path}"))?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(snapshot)?;
    writer.flush()?;

    Ok(())
}
