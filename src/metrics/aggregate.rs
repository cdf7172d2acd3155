use crate::error::{DigestError, Result};
use crate::metrics::types::{MetricSample, WeightedCost};
use crate::metrics::utility::weighted_mean;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Median transaction cost per network, in USD.
pub const TXCOSTS_MEDIAN_USD: &str = "txcosts_median_usd";
/// Transaction count per network.
pub const TXCOUNT: &str = "txcount";

/// Latest date in `samples`; the first occurrence wins on ties.
///
/// # Errors
///
/// Returns [`DigestError::Data`] for an empty dataset.
pub fn most_recent_date(samples: &[MetricSample]) -> Result<NaiveDate> {
    let mut iter = samples.iter();
    let first = iter
        .next()
        .ok_or_else(|| DigestError::Data("empty dataset".to_string()))?;

    Ok(iter.fold(first.date, |latest, s| {
        if s.date > latest { s.date } else { latest }
    }))
}

/// Weights each network's median cost by its transaction count on the most
/// recent date in `samples`.
///
/// Networks without a count sample on that date are skipped, as are samples
/// whose value is null.
pub fn aggregate_samples(samples: &[MetricSample]) -> Result<WeightedCost> {
    let date = most_recent_date(samples)?;

    let latest = samples.iter().filter(|s| s.date == date);

    let mut counts: HashMap<&str, f64> = HashMap::new();
    let mut costs: Vec<(&str, f64)> = Vec::new();
    for s in latest {
        let Some(value) = s.value else { continue };
        match s.metric_key.as_str() {
            TXCOUNT => {
                counts.entry(s.origin_key.as_str()).or_insert(value);
            }
            TXCOSTS_MEDIAN_USD => costs.push((s.origin_key.as_str(), value)),
            _ => {}
        }
    }

    let pairs: Vec<(f64, f64)> = costs
        .iter()
        .filter_map(|&(origin, cost)| counts.get(origin).map(|&count| (cost, count)))
        .collect();

    let (total_count, weighted_average) = weighted_mean(&pairs);

    Ok(WeightedCost {
        date,
        total_count,
        weighted_average,
        networks: pairs.len(),
    })
}
