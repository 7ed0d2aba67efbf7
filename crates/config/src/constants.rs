//! Centralized constants for the New Relic client workspace.
//!
//! Default values live here so the client and config crates agree on them.

// =============================================================================
// API Defaults
// =============================================================================

/// Base URL of the New Relic REST API v2.
pub const DEFAULT_BASE_URL: &str = "https://api.newrelic.com/v2";

/// Response format suffix appended to every endpoint path.
///
/// Response decoding assumes JSON bodies, so this is not configurable.
pub const RESPONSE_FORMAT: &str = "json";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-Api-Key";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment Variables
// =============================================================================

/// API key.
pub const ENV_API_KEY: &str = "NEWRELIC_API_KEY";

/// Base URL override (mainly for mock servers).
pub const ENV_BASE_URL: &str = "NEWRELIC_BASE_URL";

/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "NEWRELIC_TIMEOUT";

/// Skip TLS verification (`true`/`false`).
pub const ENV_SKIP_VERIFY: &str = "NEWRELIC_SKIP_VERIFY";
