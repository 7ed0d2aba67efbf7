//! Endpoint paths and request URL construction.
//!
//! Every request URL has the shape `{base_url}/{path}.json`, optionally
//! followed by `?` and form-urlencoded query pairs. Repeated keys are kept
//! as repeated pairs, in order.

use reqwest::Url;

use crate::error::{ClientError, Result};
use newrelic_config::constants::RESPONSE_FORMAT;

/// The fixed set of endpoints this client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `applications`
    Applications,
    /// `applications/{id}`
    Application(u64),
    /// `applications/{id}/metrics`
    MetricNames(u64),
    /// `applications/{id}/metrics/data`
    MetricData(u64),
}

impl Endpoint {
    /// Concrete path, without base URL or format suffix.
    pub fn path(&self) -> String {
        match self {
            Self::Applications => "applications".to_string(),
            Self::Application(id) => format!("applications/{id}"),
            Self::MetricNames(id) => format!("applications/{id}/metrics"),
            Self::MetricData(id) => format!("applications/{id}/metrics/data"),
        }
    }

    /// Path with the id left as a placeholder. Used for log fields and metric labels.
    pub const fn template(&self) -> &'static str {
        match self {
            Self::Applications => "applications",
            Self::Application(_) => "applications/{id}",
            Self::MetricNames(_) => "applications/{id}/metrics",
            Self::MetricData(_) => "applications/{id}/metrics/data",
        }
    }
}

/// Build the full request URL for `endpoint`.
///
/// No `?` is appended when `query` is empty.
///
/// # Errors
///
/// Returns [`ClientError::InvalidUrl`] if the base URL does not parse.
pub fn build_url(base_url: &str, endpoint: &Endpoint, query: &[(String, String)]) -> Result<Url> {
    let raw = format!(
        "{}/{}.{}",
        base_url.trim_end_matches('/'),
        endpoint.path(),
        RESPONSE_FORMAT
    );
    let mut url = Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))?;

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.newrelic.com/v2";

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_bare_endpoints() {
        assert_eq!(
            build_url(BASE, &Endpoint::Applications, &[]).unwrap().as_str(),
            "https://api.newrelic.com/v2/applications.json"
        );
        assert_eq!(
            build_url(BASE, &Endpoint::Application(456), &[]).unwrap().as_str(),
            "https://api.newrelic.com/v2/applications/456.json"
        );
        assert_eq!(
            build_url(BASE, &Endpoint::MetricNames(456), &[]).unwrap().as_str(),
            "https://api.newrelic.com/v2/applications/456/metrics.json"
        );
        assert_eq!(
            build_url(BASE, &Endpoint::MetricData(456), &[]).unwrap().as_str(),
            "https://api.newrelic.com/v2/applications/456/metrics/data.json"
        );
    }

    #[test]
    fn test_no_query_string_when_empty() {
        let url = build_url(BASE, &Endpoint::Application(1), &[]).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_repeated_keys_are_preserved() {
        let query = pairs(&[("names[]", "HttpDispatcher"), ("names[]", "Errors/all")]);
        let url = build_url(BASE, &Endpoint::MetricData(9), &query).unwrap();

        assert_eq!(url.path(), "/v2/applications/9/metrics/data.json");
        let decoded: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(decoded, query);
        assert_eq!(
            url.query(),
            Some("names%5B%5D=HttpDispatcher&names%5B%5D=Errors%2Fall")
        );
    }

    #[test]
    fn test_trailing_slash_on_base_url() {
        let url = build_url("http://127.0.0.1:8080/", &Endpoint::Applications, &[]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/applications.json");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = build_url("not a url", &Endpoint::Applications, &[]).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_templates_hide_ids() {
        assert_eq!(Endpoint::Application(123).template(), "applications/{id}");
        assert_eq!(
            Endpoint::MetricData(123).template(),
            "applications/{id}/metrics/data"
        );
    }
}
