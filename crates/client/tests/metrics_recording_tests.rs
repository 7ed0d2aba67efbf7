//! Request metrics recording tests.
//!
//! A `DebuggingRecorder` is installed as the global recorder for this test
//! binary, so every scenario lives in one test and reads a single snapshot.
//!
//! # Invariants
//! - One request counter increment per call, labelled with the endpoint template
//! - Errors are counted under their `error_category`
//! - Decode failures are counted separately from status errors
//! - A disabled collector records nothing

mod common;

use common::*;
use metrics_util::MetricKind;
use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};
use newrelic_client::MetricsCollector;
use newrelic_client::metrics::{
    METRIC_DECODE_FAILURES, METRIC_ERRORS_TOTAL, METRIC_REQUEST_DURATION, METRIC_REQUESTS_TOTAL,
};
use wiremock::matchers::{method, path};

type Entry = (MetricKind, String, Vec<(String, String)>, DebugValue);

fn entries(snapshotter: &Snapshotter) -> Vec<Entry> {
    snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .map(|(key, _, _, value)| {
            let labels = key
                .key()
                .labels()
                .map(|l| (l.key().to_string(), l.value().to_string()))
                .collect();
            (key.kind(), key.key().name().to_string(), labels, value)
        })
        .collect()
}

/// Counter value for `name` whose labels include every pair in `labels`.
fn counter(entries: &[Entry], name: &str, labels: &[(&str, &str)]) -> Option<u64> {
    entries
        .iter()
        .filter(|(kind, n, ls, _)| {
            *kind == MetricKind::Counter
                && n == name
                && labels
                    .iter()
                    .all(|(k, v)| ls.iter().any(|(lk, lv)| lk == k && lv == v))
        })
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(c) => *c,
            other => panic!("expected counter, got {:?}", other),
        })
        .reduce(|a, b| a + b)
}

fn has_histogram(entries: &[Entry], name: &str, labels: &[(&str, &str)]) -> bool {
    entries.iter().any(|(kind, n, ls, _)| {
        *kind == MetricKind::Histogram
            && n == name
            && labels
                .iter()
                .all(|(k, v)| ls.iter().any(|(lk, lv)| lk == k && lv == v))
    })
}

#[tokio::test]
async fn test_request_metrics_are_recorded() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    assert!(recorder.install().is_ok(), "failed to install recorder");

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/applications.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/applications/7.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/applications/7/metrics.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"metrics": []})))
        .mount(&mock_server)
        .await;

    let client = NewRelicClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(mock_server.uri())
        .metrics(MetricsCollector::new())
        .build()
        .unwrap();

    let err = client.get_applications().await.unwrap_err();
    assert_eq!(err.status(), Some(500));

    let err = client.get_application(7).await.unwrap_err();
    assert!(err.is_decode());

    client.get_metric_names(7).await.unwrap();

    let quiet = NewRelicClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(mock_server.uri())
        .metrics(MetricsCollector::disabled())
        .build()
        .unwrap();
    let _ = quiet.get_applications().await.unwrap_err();

    let entries = entries(&snapshotter);

    // 500 on the list endpoint
    assert_eq!(
        counter(&entries, METRIC_REQUESTS_TOTAL, &[("endpoint", "applications")]),
        Some(1)
    );
    assert_eq!(
        counter(
            &entries,
            METRIC_ERRORS_TOTAL,
            &[("endpoint", "applications"), ("error_category", "http_5xx")]
        ),
        Some(1)
    );
    assert!(has_histogram(
        &entries,
        METRIC_REQUEST_DURATION,
        &[("endpoint", "applications"), ("status", "500")]
    ));

    // malformed body on the show endpoint
    assert_eq!(
        counter(&entries, METRIC_REQUESTS_TOTAL, &[("endpoint", "applications/{id}")]),
        Some(1)
    );
    assert_eq!(
        counter(
            &entries,
            METRIC_ERRORS_TOTAL,
            &[("endpoint", "applications/{id}"), ("error_category", "decode")]
        ),
        Some(1)
    );
    assert_eq!(
        counter(&entries, METRIC_DECODE_FAILURES, &[("endpoint", "applications/{id}")]),
        Some(1)
    );

    // success: counted, no error
    assert_eq!(
        counter(
            &entries,
            METRIC_REQUESTS_TOTAL,
            &[("endpoint", "applications/{id}/metrics")]
        ),
        Some(1)
    );
    assert_eq!(
        counter(
            &entries,
            METRIC_ERRORS_TOTAL,
            &[("endpoint", "applications/{id}/metrics")]
        )
        .unwrap_or(0),
        0
    );
    assert_eq!(
        counter(&entries, METRIC_DECODE_FAILURES, &[("endpoint", "applications")]).unwrap_or(0),
        0
    );
}
