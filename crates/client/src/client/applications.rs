//! Application API methods for [`NewRelicClient`].

use secrecy::ExposeSecret;

use crate::client::NewRelicClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ApplicationsResult, SingleApplicationResult};

impl NewRelicClient {
    /// List all applications on the account.
    pub async fn get_applications(&self) -> Result<ApplicationsResult> {
        endpoints::list_applications(
            &self.http,
            &self.base_url,
            self.api_key.expose_secret(),
            self.metrics.as_ref(),
        )
        .await
    }

    /// Get a single application by id.
    pub async fn get_application(&self, app_id: u64) -> Result<SingleApplicationResult> {
        endpoints::get_application(
            &self.http,
            &self.base_url,
            self.api_key.expose_secret(),
            app_id,
            self.metrics.as_ref(),
        )
        .await
    }
}
