//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every mock server is local; no test touches the real API

// Re-export test utilities from newrelic-client
#[allow(unused_imports)]
pub use newrelic_client::testing::{load_fixture, load_fixture_str};

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use newrelic_client::{NewRelicClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key used against every mock server.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "1234";

/// Build a client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> NewRelicClient {
    init_tracing();
    NewRelicClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

/// Route `tracing` output to the test harness. Safe to call repeatedly.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Decoded query pairs of the only request the server received.
#[allow(dead_code)]
pub async fn single_request_query(server: &MockServer) -> (String, Option<Vec<(String, String)>>) {
    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    let url = &requests[0].url;
    let query = url
        .query()
        .map(|_| url.query_pairs().into_owned().collect());
    (url.path().to_string(), query)
}
