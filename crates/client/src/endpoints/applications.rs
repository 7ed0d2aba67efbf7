//! Application endpoints.

use reqwest::Client;

use crate::endpoints::request::get_json;
use crate::endpoints::url::Endpoint;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{ApplicationsResult, SingleApplicationResult};

/// List all applications (`GET /applications.json`).
pub async fn list_applications(
    client: &Client,
    base_url: &str,
    api_key: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<ApplicationsResult> {
    get_json(client, base_url, api_key, Endpoint::Applications, &[], metrics).await
}

/// Show a single application (`GET /applications/{id}.json`).
pub async fn get_application(
    client: &Client,
    base_url: &str,
    api_key: &str,
    app_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<SingleApplicationResult> {
    get_json(
        client,
        base_url,
        api_key,
        Endpoint::Application(app_id),
        &[],
        metrics,
    )
    .await
}
