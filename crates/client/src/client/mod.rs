//! Main New Relic REST API client and API methods.
//!
//! This module provides the primary [`NewRelicClient`]. It holds the
//! immutable connection settings; every method performs exactly one GET
//! and returns a freshly decoded record.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `applications`: Application list/show methods
//! - `metric_data`: Metric name and metric data methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retries, caching or pagination
//!
//! # Invariants
//! - No method mutates client state, so a client can be shared across tasks behind an `Arc`
//! - The response format is always JSON; it is a constant, not a setting

pub mod builder;

mod applications;
mod metric_data;

use secrecy::SecretString;

use crate::error::Result;
use crate::metrics::MetricsCollector;
use newrelic_config::constants::RESPONSE_FORMAT;

/// New Relic REST API v2 client.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use newrelic_client::NewRelicClient;
///
/// # async fn run() -> newrelic_client::Result<()> {
/// let client = NewRelicClient::new("my-api-key")?;
/// let apps = client.get_applications().await?;
/// for app in &apps.applications {
///     println!("{} ({})", app.name, app.health_status);
/// }
/// # Ok(())
/// # }
/// ```
///
/// Use [`NewRelicClient::builder()`] to point at another base URL, set a
/// timeout, or attach a [`MetricsCollector`].
#[derive(Debug)]
pub struct NewRelicClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: SecretString,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl NewRelicClient {
    /// Create a client for the public API with default settings.
    ///
    /// The key is stored verbatim and not validated; the API rejects a bad
    /// key on the first request. No network activity happens here.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client builder.
    pub fn builder() -> builder::NewRelicClientBuilder {
        builder::NewRelicClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the API key sent as `X-Api-Key`.
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// Response format appended to every endpoint path. Always `"json"`.
    pub const fn format(&self) -> &'static str {
        RESPONSE_FORMAT
    }
}
