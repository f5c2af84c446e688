use std::time::Duration;

use crate::error::{DashboardError, Result};

/// Base URL of the statistics API when none is given.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Per-request timeout when none is given.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Connection settings shared by every request of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Builds a [`reqwest::Client`] that gives up on any request after `timeout`.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(DashboardError::ClientBuild)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }
}
