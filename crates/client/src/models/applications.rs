//! Application models for the `applications` endpoints.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// Response of `GET /applications.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationsResult {
    #[serde(deserialize_with = "null_as_default")]
    pub applications: Vec<Application>,
}

/// Response of `GET /applications/{id}.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleApplicationResult {
    pub application: Application,
}

/// A monitored application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub health_status: String,
    pub reporting: bool,
    /// ISO-8601 timestamp; empty when the application has never reported.
    #[serde(deserialize_with = "null_as_default")]
    pub last_reported_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub application_summary: ApplicationSummary,
    #[serde(deserialize_with = "null_as_default")]
    pub end_user_summary: EndUserSummary,
    #[serde(deserialize_with = "null_as_default")]
    pub settings: Settings,
    #[serde(deserialize_with = "null_as_default")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationSummary {
    pub response_time: f64,
    pub throughput: f64,
    pub error_rate: f64,
    pub apdex_target: f64,
    pub apdex_score: f64,
}

/// Browser (real user monitoring) summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndUserSummary {
    pub response_time: f64,
    pub throughput: f64,
    pub apdex_target: f64,
    pub apdex_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app_apdex_threshold: f64,
    pub end_user_apdex_threshold: f64,
    pub enable_real_user_monitoring: bool,
    pub use_server_side_config: bool,
}

/// Ids of related resources. These are not fetched by this client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    #[serde(deserialize_with = "null_as_default")]
    pub servers: Vec<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub application_hosts: Vec<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub application_instances: Vec<u64>,
}
