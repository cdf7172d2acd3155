//! Runtime settings, read from the environment (after `.env` is loaded).

use anyhow::{Context, Result, bail};
use std::time::Duration;

use crate::feed::RSS_DISPLAY_COUNT;
use crate::metrics::FUNDAMENTALS_URL;

pub const ENV_FUNDAMENTALS_URL: &str = "FUNDAMENTALS_URL";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
pub const ENV_RSS_DISPLAY_COUNT: &str = "RSS_DISPLAY_COUNT";

const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub fundamentals_url: String,
    pub http_timeout: Duration,
    pub display_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fundamentals_url: FUNDAMENTALS_URL.to_string(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            display_count: RSS_DISPLAY_COUNT,
        }
    }
}

impl Settings {
    /// Reads settings from process environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] but with a caller-supplied lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(url) = lookup(ENV_FUNDAMENTALS_URL) {
            settings.fundamentals_url = url;
        }
        if let Some(raw) = lookup(ENV_HTTP_TIMEOUT_SECS) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_HTTP_TIMEOUT_SECS} must be an integer, got '{raw}'"))?;
            if secs == 0 {
                bail!("{ENV_HTTP_TIMEOUT_SECS} must be at least 1 second");
            }
            settings.http_timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = lookup(ENV_RSS_DISPLAY_COUNT) {
            settings.display_count = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_RSS_DISPLAY_COUNT} must be an integer, got '{raw}'"))?;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.display_count, 6);
        assert_eq!(settings.http_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_env_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            (ENV_FUNDAMENTALS_URL, "http://localhost:8080/f.json"),
            (ENV_HTTP_TIMEOUT_SECS, " 5 "),
            (ENV_RSS_DISPLAY_COUNT, "12"),
        ]))
        .unwrap();

        assert_eq!(settings.fundamentals_url, "http://localhost:8080/f.json");
        assert_eq!(settings.http_timeout, Duration::from_secs(5));
        assert_eq!(settings.display_count, 12);
    }

    #[test]
    fn test_invalid_number_is_error() {
        let err = Settings::from_lookup(lookup(&[(ENV_RSS_DISPLAY_COUNT, "six")])).unwrap_err();
        assert!(err.to_string().contains(ENV_RSS_DISPLAY_COUNT));
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let err = Settings::from_lookup(lookup(&[(ENV_HTTP_TIMEOUT_SECS, "0")])).unwrap_err();
        assert!(err.to_string().contains(ENV_HTTP_TIMEOUT_SECS));
    }
}
