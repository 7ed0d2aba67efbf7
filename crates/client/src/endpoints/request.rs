//! Single request routine shared by every endpoint.
//!
//! `get_json` performs one authenticated GET and decodes the body:
//! - Non-2xx responses become [`ClientError::ApiError`] without decoding the
//!   body as a success shape
//! - Empty, non-JSON, or wrongly shaped bodies become [`ClientError::Decode`]
//! - Transport failures (including timeouts) become [`ClientError::HttpError`]
//! - A request that cannot be built is [`ClientError::InvalidRequest`] and is never sent
//!
//! There is no retry. Callers that want one should wrap the client.

use std::time::Instant;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::endpoints::url::{Endpoint, build_url};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::ApiErrorBody;
use newrelic_config::constants::API_KEY_HEADER;

/// GET `endpoint` with `query` and decode the JSON body into `T`.
pub async fn get_json<T>(
    client: &Client,
    base_url: &str,
    api_key: &str,
    endpoint: Endpoint,
    query: &[(String, String)],
    metrics: Option<&MetricsCollector>,
) -> Result<T>
where
    T: DeserializeOwned,
{
    let url = build_url(base_url, &endpoint, query)?;
    let label = endpoint.template();

    if let Some(m) = metrics {
        m.record_request(label);
    }

    let result = send_and_decode(client, url, api_key, label, metrics).await;

    if let (Err(e), Some(m)) = (&result, metrics) {
        m.record_client_error(label, e);
    }

    result
}

async fn send_and_decode<T>(
    client: &Client,
    url: Url,
    api_key: &str,
    label: &'static str,
    metrics: Option<&MetricsCollector>,
) -> Result<T>
where
    T: DeserializeOwned,
{
    let url_str = url.to_string();
    let started = Instant::now();

    let request = client
        .get(url)
        .header(API_KEY_HEADER, api_key)
        .build()
        .map_err(ClientError::InvalidRequest)?;

    let response = match client.execute(request).await {
        Ok(response) => response,
        Err(e) => {
            if let Some(m) = metrics {
                m.record_request_duration(label, started.elapsed(), None);
            }
            debug!(endpoint = label, error = %e, "Request failed before a response was received");
            return Err(ClientError::from(e));
        }
    };

    let status = response.status();
    if let Some(m) = metrics {
        m.record_request_duration(label, started.elapsed(), Some(status.as_u16()));
    }
    debug!(
        endpoint = label,
        status = status.as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Received response"
    );

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        let message = ApiErrorBody::title_from(&body).unwrap_or_else(|| body.clone());

        warn!(endpoint = label, status = status.as_u16(), %message, "API returned an error status");

        return Err(ClientError::ApiError {
            status: status.as_u16(),
            url: url_str,
            message,
            body,
        });
    }

    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        warn!(endpoint = label, "API returned an empty body");
    }

    serde_json::from_slice::<T>(&bytes).map_err(|source| {
        if let Some(m) = metrics {
            m.record_decode_failure(label, std::any::type_name::<T>());
        }
        warn!(endpoint = label, error = %source, "Failed to decode response body");
        ClientError::Decode {
            url: url_str,
            source,
        }
    })
}
