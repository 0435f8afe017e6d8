use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::client::{DataType, FetchError, HkoClient, lenient, settle, text_or};
use crate::domain::weather::LocalWeatherReport;

impl HkoClient {
    #[instrument(skip(self))]
    pub async fn fetch_local_weather_report(&self) -> Option<LocalWeatherReport> {
        settle(
            "local weather report",
            self.try_fetch_local_weather_report().await.map(Some),
        )
    }

    pub async fn try_fetch_local_weather_report(
        &self,
    ) -> Result<LocalWeatherReport, FetchError> {
        self.fetch_parsed(DataType::LocalForecast, parse_local_weather_report)
            .await
    }
}

pub fn parse_local_weather_report(payload: Value) -> Result<LocalWeatherReport, serde_json::Error> {
    let report: LocalForecast = serde_json::from_value(payload)?;
    Ok(LocalWeatherReport {
        general_situation: text_or(report.general_situation, "No data available"),
        forecast_period: text_or(report.forecast_period, ""),
        forecast_description: text_or(report.forecast_desc, ""),
        outlook: text_or(report.outlook, "No outlook available"),
        update_time: text_or(report.update_time, ""),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocalForecast {
    #[serde(default, deserialize_with = "lenient")]
    general_situation: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    forecast_period: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    forecast_desc: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    outlook: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    update_time: Option<String>,
}
