#![allow(dead_code)]

use hk_weather::data::{HkoClient, HkoConfig};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, query_param},
};

pub fn current_payload() -> Value {
    json!({
        "rainfall": {
            "data": [
                {"unit": "mm", "place": "Central & Western District", "max": 0, "main": "FALSE"},
                {"unit": "mm", "place": "Yau Tsim Mong", "max": 4, "main": "FALSE"}
            ],
            "startTime": "2025-04-16T09:45:00+08:00",
            "endTime": "2025-04-16T10:45:00+08:00"
        },
        "icon": [83],
        "iconUpdateTime": "2025-04-16T10:50:00+08:00",
        "uvindex": "",
        "updateTime": "2025-04-16T11:02:00+08:00",
        "temperature": {
            "data": [
                {"place": "King's Park", "value": 24, "unit": "C"},
                {"place": "Hong Kong Observatory", "value": 25, "unit": "C"},
                {"place": "Sha Tin", "value": 26, "unit": "C"}
            ],
            "recordTime": "2025-04-16T11:00:00+08:00"
        },
        "humidity": {
            "recordTime": "2025-04-16T11:00:00+08:00",
            "data": [{"unit": "percent", "value": 88, "place": "Hong Kong Observatory"}]
        },
        "warningMessage": ["The Amber Rainstorm Warning Signal is in force."]
    })
}

pub fn forecast_payload() -> Value {
    let days = (16..=24)
        .map(|day| {
            json!({
                "forecastDate": format!("202504{day}"),
                "week": "Wednesday",
                "forecastWind": "East force 3 to 4.",
                "forecastWeather": "Mainly cloudy with a few showers.",
                "forecastMaxtemp": {"value": 27, "unit": "C"},
                "forecastMintemp": {"value": 22, "unit": "C"},
                "forecastMaxrh": {"value": 95, "unit": "percent"},
                "forecastMinrh": {"value": 70, "unit": "percent"},
                "ForecastIcon": 62,
                "PSR": "Medium"
            })
        })
        .collect::<Vec<_>>();
    json!({
        "generalSituation": "An easterly airstream is affecting the coast.",
        "weatherForecast": days,
        "updateTime": "2025-04-16T11:30:00+08:00"
    })
}

pub fn warnings_payload() -> Value {
    json!({
        "WRAIN": {
            "name": "Amber Rainstorm Warning Signal",
            "code": "WRAINA",
            "actionCode": "ISSUE",
            "issueTime": "2025-04-16T09:10:00+08:00",
            "updateTime": "2025-04-16T09:10:00+08:00"
        },
        "WTS": {"name": "Thunderstorm Warning", "code": "WTS", "actionCode": "EXTEND"}
    })
}

pub fn local_report_payload() -> Value {
    json!({
        "generalSituation": "A trough of low pressure is bringing heavy showers to the coast.",
        "forecastPeriod": "Weather forecast for this afternoon and tonight",
        "forecastDesc": "Cloudy with heavy showers and thunderstorms.",
        "outlook": "Showery in the next few days.",
        "updateTime": "2025-04-16T11:45:00+08:00"
    })
}

pub async fn mount_json(server: &MockServer, data_type: &str, body: Value) {
    Mock::given(method("GET"))
        .and(query_param("dataType", data_type))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, data_type: &str, status: u16) {
    Mock::given(method("GET"))
        .and(query_param("dataType", data_type))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub async fn mount_raw(server: &MockServer, data_type: &str, body: &str) {
    Mock::given(method("GET"))
        .and(query_param("dataType", data_type))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Serves every endpoint with the fixtures above.
pub async fn healthy_server() -> MockServer {
    let server = MockServer::start().await;
    mount_json(&server, "rhrread", current_payload()).await;
    mount_json(&server, "fnd", forecast_payload()).await;
    mount_json(&server, "warnsum", warnings_payload()).await;
    mount_json(&server, "flw", local_report_payload()).await;
    server
}

pub fn client_for(server: &MockServer) -> HkoClient {
    HkoClient::with_base_url(server.uri()).expect("client")
}

pub fn client_with(server: &MockServer, config: HkoConfig) -> HkoClient {
    HkoClient::new(HkoConfig {
        base_url: server.uri(),
        ..config
    })
    .expect("client")
}
