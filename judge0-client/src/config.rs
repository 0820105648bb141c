use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::Error;

/// Public Judge0 CE instance used when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://ce.judge0.com";

/// Environment variable consulted by [`BackendConfig::from_env`]
pub const API_URL_ENV: &str = "JUDGE0_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the Judge0 API, without a trailing slash
    pub api_url: String,

    /// Per-request timeout applied by the HTTP client
    pub request_timeout: Duration,

    /// Exchange source, stdin and outputs base64-encoded
    pub base64_encoded: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL.to_string())
    }
}

impl BackendConfig {
    pub fn new(api_url: String) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(30),
            base64_encoded: false,
        }
    }

    /// Build a configuration from `JUDGE0_API_URL`, falling back to the public instance.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn with_base64_encoded(mut self, base64_encoded: bool) -> Self {
        self.base64_encoded = base64_encoded;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(Error::Configuration(format!(
                "api_url must be an http(s) URL, got {:?}",
                self.api_url
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(Error::Configuration(
                "request_timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
