mod common;

use common::{client_with, healthy_server};
use hk_weather::data::HkoConfig;

#[tokio::test]
async fn caching_reduces_network_calls() {
    let server = healthy_server().await;
    let client = client_with(
        &server,
        HkoConfig {
            cache_ttl_secs: 300,
            ..HkoConfig::default()
        },
    );

    assert_eq!(client.fetch_forecast().await.len(), 9);
    assert_eq!(client.fetch_forecast().await.len(), 9);
    assert!(client.fetch_current_conditions().await.is_some());
    assert_eq!(client.fetch_regional_temperatures().await.len(), 3);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(
        requests.len(),
        2,
        "Expected one request per data type with cache, got {}",
        requests.len()
    );
}

#[tokio::test]
async fn without_cache_every_call_refetches() {
    let server = healthy_server().await;
    let client = client_with(&server, HkoConfig::default());

    client.fetch_forecast().await;
    client.fetch_forecast().await;

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn failed_responses_are_not_cached() {
    let server = wiremock::MockServer::start().await;
    common::mount_status(&server, "fnd", 500).await;
    let client = client_with(
        &server,
        HkoConfig {
            cache_ttl_secs: 300,
            ..HkoConfig::default()
        },
    );

    assert!(client.fetch_forecast().await.is_empty());
    assert!(client.fetch_forecast().await.is_empty());

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn wrong_shape_payloads_are_not_cached() {
    let server = wiremock::MockServer::start().await;
    common::mount_json(&server, "fnd", serde_json::json!({"unexpected": true})).await;
    let client = client_with(
        &server,
        HkoConfig {
            cache_ttl_secs: 300,
            ..HkoConfig::default()
        },
    );

    assert!(client.fetch_forecast().await.is_empty());
    assert!(client.fetch_forecast().await.is_empty());

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 2);
}
