mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use crate::error::{DigestError, Result};
use tracing::{debug, warn};

/// Issues a GET for `url` and returns the body bytes.
///
/// Any non-2xx status is a [`DigestError::Transport`].
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let url = reqwest::Url::parse(url)
        .map_err(|e| DigestError::Transport(format!("invalid url '{url}': {e}")))?;
    let req = reqwest::Request::new(reqwest::Method::GET, url);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        warn!(
            status = status.as_u16(),
            reason = status.canonical_reason().unwrap_or(""),
            "Non-success response"
        );
        return Err(DigestError::Transport(format!(
            "request failed with status {status}"
        )));
    }

    let bytes = resp.bytes().await?.to_vec();
    debug!(bytes = bytes.len(), "Response body received");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Canned {
        status: u16,
        body: &'static str,
    }

    #[async_trait]
    impl HttpClient for Canned {
        async fn execute(&self, _req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
            let resp = http::Response::builder()
                .status(self.status)
                .body(self.body)
                .unwrap();
            Ok(resp.into())
        }
    }

    #[tokio::test]
    async fn test_fetch_bytes_returns_body_on_success() {
        let client = Canned {
            status: 200,
            body: "[]",
        };
        let bytes = fetch_bytes(&client, "http://localhost/data.json")
            .await
            .unwrap();
        assert_eq!(bytes, b"[]");
    }

    #[tokio::test]
    async fn test_fetch_bytes_rejects_non_success_status() {
        let client = Canned {
            status: 503,
            body: "unavailable",
        };
        let err = fetch_bytes(&client, "http://localhost/data.json")
            .await
            .unwrap_err();
        assert!(matches!(err, DigestError::Transport(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_fetch_bytes_rejects_invalid_url() {
        let client = Canned {
            status: 200,
            body: "[]",
        };
        let err = fetch_bytes(&client, "not a url").await.unwrap_err();
        assert!(matches!(err, DigestError::Transport(_)));
    }
}
