//! Client runtime configuration.
//!
//! Resolved once at process startup and passed into the client, so no
//! request handler ever reads process-wide environment variables.

use std::time::Duration;

use crate::error::{ApiError, ApiResult};

/// Base URL of the record service when `PCV_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// Per-request timeout when `PCV_HTTP_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Record service connection settings.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a new `ClientConfig`. A trailing slash on the base URL is
    /// dropped so request paths can always be joined with one.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, timeout }
    }

    /// Resolve configuration from `PCV_API_URL` and
    /// `PCV_HTTP_TIMEOUT_SECS`, falling back to the defaults.
    pub fn from_env() -> ApiResult<Self> {
        let base_url =
            std::env::var("PCV_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());

        let timeout_secs = match std::env::var("PCV_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ApiError::Config(format!(
                    "PCV_HTTP_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ApiError::Config(
                "PCV_HTTP_TIMEOUT_SECS must be at least 1".into(),
            ));
        }

        Ok(Self::new(base_url, Duration::from_secs(timeout_secs)))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}
