//! Metric name and metric data endpoints.

use reqwest::Client;

use crate::endpoints::request::get_json;
use crate::endpoints::url::Endpoint;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{MetricDataParams, MetricDataResult, MetricNamesResult};

/// List the metric names an application reports (`GET /applications/{id}/metrics.json`).
pub async fn list_metric_names(
    client: &Client,
    base_url: &str,
    api_key: &str,
    app_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<MetricNamesResult> {
    get_json(
        client,
        base_url,
        api_key,
        Endpoint::MetricNames(app_id),
        &[],
        metrics,
    )
    .await
}

/// Fetch metric time series (`GET /applications/{id}/metrics/data.json`).
///
/// `params` is sent as-is. The API requires at least one `names[]` entry but
/// that is not checked here.
pub async fn get_metric_data(
    client: &Client,
    base_url: &str,
    api_key: &str,
    app_id: u64,
    params: &MetricDataParams,
    metrics: Option<&MetricsCollector>,
) -> Result<MetricDataResult> {
    get_json(
        client,
        base_url,
        api_key,
        Endpoint::MetricData(app_id),
        params.pairs(),
        metrics,
    )
    .await
}
