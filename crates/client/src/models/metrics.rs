//! Metric models for the `applications/{id}/metrics` endpoints.
//!
//! Metric value sets are schema-free: each metric name exposes its own value
//! keys (`average_response_time`, `calls_per_minute`, ...), so timeslice values
//! are a map of [`MetricValue`] rather than a fixed record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// Query key for requested metric names. May repeat.
pub const PARAM_NAMES: &str = "names[]";
/// Query key for requested value names. May repeat.
pub const PARAM_VALUES: &str = "values[]";
pub const PARAM_FROM: &str = "from";
pub const PARAM_TO: &str = "to";
pub const PARAM_SUMMARIZE: &str = "summarize";

/// Response of `GET /applications/{id}/metrics.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricNamesResult {
    #[serde(deserialize_with = "null_as_default")]
    pub metrics: Vec<MetricName>,
}

/// A metric name and the value keys it exposes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricName {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub values: Vec<String>,
}

/// Response of `GET /applications/{id}/metrics/data.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricDataResult {
    #[serde(deserialize_with = "null_as_default")]
    pub metric_data: MetricData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricData {
    #[serde(deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub to: String,
    /// Requested names the API did not recognize.
    #[serde(deserialize_with = "null_as_default")]
    pub metrics_not_found: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub metrics_found: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub metrics: Vec<Metric>,
}

impl MetricData {
    /// Find a returned metric by name.
    pub fn metric(&self, name: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.name == name)
    }
}

/// One metric's time series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timeslices: Vec<Timeslice>,
}

/// A time-bucketed sample with its own bounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeslice {
    #[serde(deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub to: String,
    #[serde(deserialize_with = "null_as_default")]
    pub values: BTreeMap<String, MetricValue>,
}

impl Timeslice {
    pub fn value(&self, key: &str) -> Option<&MetricValue> {
        self.values.get(key)
    }
}

/// A metric value.
///
/// Scalars are typed. `Number` keeps the JSON number as sent, so integer
/// counts survive re-encoding unchanged. Arrays and objects land in `Other`
/// so one unusual value never fails the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl MetricValue {
    /// Numeric view of the value, if it is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The raw JSON of an array or object value.
    pub fn as_other(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Other(v) => Some(v),
            _ => None,
        }
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        serde_json::Number::from_f64(v).map_or(Self::Null, Self::Number)
    }
}

impl From<u64> for MetricValue {
    fn from(v: u64) -> Self {
        Self::Number(v.into())
    }
}

/// Ordered multi-map of query parameters for the metric data endpoint.
///
/// Repeated keys are kept as separate pairs in insertion order, which is how
/// several `names[]` or `values[]` are requested in one call.
///
/// ```
/// use newrelic_client::models::MetricDataParams;
///
/// let params = MetricDataParams::new()
///     .name("HttpDispatcher")
///     .name("Errors/all")
///     .value("average_response_time")
///     .summarize(true);
/// assert_eq!(params.pairs().len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricDataParams {
    pairs: Vec<(String, String)>,
}

impl MetricDataParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// One `names[]` pair per name and nothing else; the API picks defaults
    /// for `from`, `to`, `values[]` and `summarize`.
    pub fn for_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(Self::new(), |p, n| p.name(n))
    }

    /// Append a raw key/value pair.
    pub fn add(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Request a metric by name (`names[]`).
    pub fn name(self, name: impl Into<String>) -> Self {
        self.add(PARAM_NAMES, name)
    }

    /// Request a specific value key (`values[]`).
    pub fn value(self, value: impl Into<String>) -> Self {
        self.add(PARAM_VALUES, value)
    }

    /// Time range bounds (ISO-8601), sent as `from` and `to`.
    pub fn range(self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.add(PARAM_FROM, from).add(PARAM_TO, to)
    }

    /// Collapse the range into a single timeslice.
    pub fn summarize(self, summarize: bool) -> Self {
        self.add(PARAM_SUMMARIZE, summarize.to_string())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// All values stored under `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Vec<(String, String)>> for MetricDataParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

impl<K, V> FromIterator<(K, V)> for MetricDataParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
