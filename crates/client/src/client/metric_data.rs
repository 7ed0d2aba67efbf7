//! Metric API methods for [`NewRelicClient`].
//!
//! # What this module handles:
//! - Listing metric names for an application
//! - Fetching metric data with server-side defaults or a full parameter set
//!
//! # What this module does NOT handle:
//! - Checking that requested names exist (see `MetricData::metrics_not_found`)

use secrecy::ExposeSecret;

use crate::client::NewRelicClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{MetricDataParams, MetricDataResult, MetricNamesResult};

impl NewRelicClient {
    /// List the metric names (and their value keys) an application reports.
    pub async fn get_metric_names(&self, app_id: u64) -> Result<MetricNamesResult> {
        endpoints::list_metric_names(
            &self.http,
            &self.base_url,
            self.api_key.expose_secret(),
            app_id,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Fetch data for `names`, leaving `from`, `to`, `values[]` and `summarize`
    /// to the API defaults.
    pub async fn get_default_metric_data<I, S>(
        &self,
        app_id: u64,
        names: I,
    ) -> Result<MetricDataResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let params = MetricDataParams::for_names(names);
        self.get_metric_data(app_id, &params).await
    }

    /// Fetch metric data with a caller-built parameter set.
    ///
    /// `params` must include at least one `names[]` entry for the API to
    /// return anything useful; it is sent unchanged.
    pub async fn get_metric_data(
        &self,
        app_id: u64,
        params: &MetricDataParams,
    ) -> Result<MetricDataResult> {
        endpoints::get_metric_data(
            &self.http,
            &self.base_url,
            self.api_key.expose_secret(),
            app_id,
            params,
            self.metrics.as_ref(),
        )
        .await
    }
}
