//! Data models for New Relic API responses.
//!
//! Types are organized by resource in submodules and re-exported here.
//! Every record decodes from `{}` to its default, so an empty response body
//! object yields empty collections rather than an error.

pub mod applications;
pub mod common;
pub mod metrics;

pub use applications::{
    Application, ApplicationSummary, ApplicationsResult, EndUserSummary, Links, Settings,
    SingleApplicationResult,
};
pub use common::{ApiErrorBody, ApiErrorDetail};
pub use metrics::{
    Metric, MetricData, MetricDataParams, MetricDataResult, MetricName, MetricNamesResult,
    MetricValue, Timeslice,
};
