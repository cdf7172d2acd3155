//! Transaction-cost metrics from the growthepie fundamentals dataset.
//!
//! Fetches the full dataset, keeps the most recent day, and weights each
//! network's median transaction cost by its transaction count.

pub mod aggregate;
pub mod types;
pub mod utility;

use crate::error::Result;
use crate::fetch::{HttpClient, fetch_bytes};
use crate::parser::parse_samples;
use aggregate::aggregate_samples;
use chrono::Utc;
use tracing::{error, info};
use types::{AggregateMetrics, MetricResult, WeightedCost};

/// Default location of the fundamentals dataset.
pub const FUNDAMENTALS_URL: &str = "https://api.growthepie.xyz/v1/fundamentals_full.json";

/// Fetches the dataset at `url` and returns the total transaction count and
/// the count-weighted median transaction cost for the most recent day.
///
/// Never fails: any transport or data failure is reported as
/// [`MetricResult::Error`] in both fields.
#[tracing::instrument(skip(client))]
pub async fn fetch_aggregate_metrics<C: HttpClient>(client: &C, url: &str) -> AggregateMetrics {
    match fetch_weighted_cost(client, url).await {
        Ok(agg) => {
            let timestamp = Utc::now().timestamp_millis();
            info!(
                date = %agg.date,
                networks = agg.networks,
                total_count = agg.total_count,
                weighted_average = agg.weighted_average,
                "Metrics aggregated"
            );
            AggregateMetrics {
                tx_count: MetricResult::Value {
                    value: agg.total_count,
                    timestamp,
                },
                tx_costs_median_usd: MetricResult::Value {
                    value: agg.weighted_average,
                    timestamp,
                },
            }
        }
        Err(e) => {
            error!(error = %e, "Metrics fetch failed");
            let message = e.to_string();
            AggregateMetrics {
                tx_count: MetricResult::Error {
                    error: message.clone(),
                },
                tx_costs_median_usd: MetricResult::Error { error: message },
            }
        }
    }
}

async fn fetch_weighted_cost<C: HttpClient>(client: &C, url: &str) -> Result<WeightedCost> {
    let bytes = fetch_bytes(client, url).await?;
    let samples = parse_samples(&bytes)?;
    aggregate_samples(&samples)
}
