use thiserror::Error;

/// Failure kinds surfaced by the metrics pipeline.
///
/// Both kinds are caught at the aggregator boundary and turned into
/// [`MetricResult::Error`](crate::metrics::types::MetricResult) values.
#[derive(Debug, Error)]
pub enum DigestError {
    /// Invalid URL, network failure, timeout or non-2xx response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Unparsable body or a dataset with nothing to aggregate.
    #[error("data failure: {0}")]
    Data(String),
}

impl From<reqwest::Error> for DigestError {
    fn from(err: reqwest::Error) -> Self {
        DigestError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for DigestError {
    fn from(err: serde_json::Error) -> Self {
        DigestError::Data(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DigestError>;
