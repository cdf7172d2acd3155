//! JSON parser for the growthepie fundamentals dataset.

use crate::error::Result;
use crate::metrics::types::MetricSample;

/// Decodes a JSON array of [`MetricSample`] from raw bytes.
///
/// # Errors
///
/// Returns [`DigestError::Data`](crate::error::DigestError::Data) if the bytes
/// are not a JSON array of samples.
pub fn parse_samples(bytes: &[u8]) -> Result<Vec<MetricSample>> {
    Ok(serde_json::from_slice(bytes)?)
}
