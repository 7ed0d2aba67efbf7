//! New Relic REST API v2 client.
//!
//! This crate provides a typed, async client for a subset of the New Relic
//! application monitoring API: listing and showing applications, listing
//! metric names, and fetching metric time series. Requests authenticate with
//! an `X-Api-Key` header and always ask for JSON.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod models;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::NewRelicClient;
pub use client::builder::NewRelicClientBuilder;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    Application, ApplicationSummary, ApplicationsResult, EndUserSummary, Links, Metric,
    MetricData, MetricDataParams, MetricDataResult, MetricName, MetricNamesResult, MetricValue,
    Settings, SingleApplicationResult, Timeslice,
};
