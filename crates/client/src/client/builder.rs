//! Client builder for constructing [`NewRelicClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects, TLS verification)
//!
//! # Invariants
//! - `api_key` must be present before `build()`; its content is never checked
//! - The base URL defaults to the public API and is always stored without trailing slashes
//! - Every request is bounded by the configured timeout
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use secrecy::SecretString;

use crate::client::NewRelicClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use newrelic_config::{
    Config,
    constants::{DEFAULT_BASE_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`NewRelicClient`].
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use newrelic_client::NewRelicClient;
///
/// let client = NewRelicClient::builder()
///     .api_key("my-api-key")
///     .base_url("http://127.0.0.1:8080".to_string())
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok::<(), newrelic_client::ClientError>(())
/// ```
pub struct NewRelicClientBuilder {
    api_key: Option<SecretString>,
    base_url: String,
    skip_verify: bool,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for NewRelicClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
        }
    }
}

impl NewRelicClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key sent as `X-Api-Key`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(key.into().into()));
        self
    }

    /// Set the base URL, e.g. a mock server for tests.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against local test servers.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the per-request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Record request latency, counts and error categories through the `metrics` facade.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Take the API key and connection settings from a loaded [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.api_key = Some(config.api_key.clone());
        self.base_url = config.connection.base_url.clone();
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://api.newrelic.com/v2/"` -> `"https://api.newrelic.com/v2"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`NewRelicClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingApiKey`] if no key was provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<NewRelicClient> {
        let api_key = self.api_key.ok_or(ClientError::MissingApiKey)?;
        let base_url = Self::normalize_base_url(self.base_url);

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(NewRelicClient {
            http,
            base_url,
            api_key,
            metrics: self.metrics,
        })
    }
}
