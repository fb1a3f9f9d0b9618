//! Client configuration: base URL and request timeout.

use std::time::Duration;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default backend origin when `RENTAL_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Fixed per-request timeout. There is no retry or backoff policy.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings shared by every request.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load from `RENTAL_BASE_URL`, falling back to the default origin.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("RENTAL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        Self::new(base_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
