//! REST API endpoint implementations.
//!
//! Each function performs exactly one GET through [`request::get_json`]:
//! build the URL, attach the API key, check the status, decode the body.
//! The [`crate::NewRelicClient`] methods delegate here; the functions are
//! public so tests can drive them against a mock server directly.

mod applications;
mod metrics;
pub mod request;
pub mod url;

pub use applications::{get_application, list_applications};
pub use metrics::{get_metric_data, list_metric_names};
pub use request::get_json;
pub use url::{Endpoint, build_url};
