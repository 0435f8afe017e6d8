mod common;

use common::{
    client_for, client_with, healthy_server, mount_json, mount_raw, mount_status,
};
use hk_weather::{
    data::{FetchError, HkoConfig, Language, ReferenceStations},
    domain::weather::ConditionCategory,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, query_param},
};

#[tokio::test]
async fn current_conditions_pick_reference_stations() {
    let server = healthy_server().await;
    let current = client_for(&server)
        .fetch_current_conditions()
        .await
        .expect("current conditions");

    assert_eq!(current.temperature, Some(25.0));
    assert_eq!(current.humidity, Some(88.0));
    assert_eq!(current.condition, ConditionCategory::Rainy);
    assert_eq!(current.rainfall, Some(4.0));
    assert_eq!(current.uv_index, None);
    assert_eq!(current.update_time, "2025-04-16T11:02:00+08:00");
}

#[tokio::test]
async fn configured_station_changes_the_reading() {
    let server = healthy_server().await;
    let client = client_with(
        &server,
        HkoConfig {
            stations: ReferenceStations {
                primary: "Sha Tin".to_string(),
                ..ReferenceStations::default()
            },
            ..HkoConfig::default()
        },
    );

    let current = client.fetch_current_conditions().await.expect("current");
    assert_eq!(current.temperature, Some(26.0));
    assert_eq!(current.humidity, None);
}

#[tokio::test]
async fn requests_carry_data_type_and_language() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("dataType", "flw"))
        .and(query_param("lang", "tc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::local_report_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(
        &server,
        HkoConfig {
            lang: Language::Tc,
            ..HkoConfig::default()
        },
    );
    assert!(client.fetch_local_weather_report().await.is_some());
}

#[tokio::test]
async fn regional_temperatures_list_every_station() {
    let server = healthy_server().await;
    let regional = client_for(&server).fetch_regional_temperatures().await;

    let places = regional.iter().map(|r| r.place.as_str()).collect::<Vec<_>>();
    assert_eq!(places, vec!["King's Park", "Hong Kong Observatory", "Sha Tin"]);
    assert!(regional.iter().all(|r| r.record_time == "2025-04-16T11:00:00+08:00"));
}

#[tokio::test]
async fn forecast_is_truncated_to_configured_days() {
    let server = healthy_server().await;
    assert_eq!(client_for(&server).fetch_forecast().await.len(), 9);

    let client = client_with(
        &server,
        HkoConfig {
            forecast_days: 3,
            ..HkoConfig::default()
        },
    );
    let days = client.fetch_forecast().await;
    assert_eq!(days.len(), 3);
    assert_eq!(days[0].date, "20250416");
    assert_eq!(days[0].rain_probability, "Medium");
    assert_eq!(days[0].rain_probability_pct(), 0);
}

#[tokio::test]
async fn warnings_keep_upstream_order() {
    let server = healthy_server().await;
    let warnings = client_for(&server).fetch_warnings().await;

    let codes = warnings.iter().map(|w| w.code.as_str()).collect::<Vec<_>>();
    assert_eq!(codes, vec!["WRAINA", "WTS"]);
    assert_eq!(warnings[1].action, "EXTEND");
}

#[tokio::test]
async fn empty_warning_summary_means_no_warnings() {
    let server = MockServer::start().await;
    mount_json(&server, "warnsum", json!({})).await;
    assert!(client_for(&server).fetch_warnings().await.is_empty());
}

#[tokio::test]
async fn server_error_collapses_to_empty() {
    let server = MockServer::start().await;
    mount_status(&server, "rhrread", 500).await;
    mount_status(&server, "fnd", 503).await;
    let client = client_for(&server);

    assert!(client.fetch_current_conditions().await.is_none());
    assert!(client.fetch_regional_temperatures().await.is_empty());
    assert!(client.fetch_forecast().await.is_empty());

    let err = client.try_fetch_forecast().await.expect_err("status error");
    assert!(matches!(err, FetchError::Status { status, .. } if status.as_u16() == 503));
    assert_eq!(err.to_string(), "fnd request returned 503 Service Unavailable");
}

#[tokio::test]
async fn malformed_json_collapses_to_empty() {
    let server = MockServer::start().await;
    mount_raw(&server, "warnsum", "{not json").await;
    mount_raw(&server, "flw", "<html>maintenance</html>").await;
    let client = client_for(&server);

    assert!(client.fetch_warnings().await.is_empty());
    assert!(client.fetch_local_weather_report().await.is_none());
    assert!(matches!(
        client.try_fetch_warnings().await,
        Err(FetchError::Decode { .. })
    ));
}

#[tokio::test]
async fn missing_humidity_block_yields_none() {
    let server = MockServer::start().await;
    let mut payload = common::current_payload();
    payload
        .as_object_mut()
        .expect("object")
        .remove("humidity");
    mount_json(&server, "rhrread", payload).await;
    let client = client_for(&server);

    assert!(client.fetch_current_conditions().await.is_none());
    assert_eq!(client.fetch_regional_temperatures().await.len(), 3);
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let client = hk_weather::data::HkoClient::with_base_url("http://127.0.0.1:1").expect("client");
    assert!(client.fetch_forecast().await.is_empty());
    assert!(matches!(
        client.try_fetch_forecast().await,
        Err(FetchError::Transport { .. })
    ));
}
