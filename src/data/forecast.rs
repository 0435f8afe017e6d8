use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::client::{DataType, FetchError, HkoClient, lenient, settle, text_or};
use crate::domain::weather::ForecastDay;

impl HkoClient {
    #[instrument(skip(self))]
    pub async fn fetch_forecast(&self) -> Vec<ForecastDay> {
        settle("forecast", self.try_fetch_forecast().await)
    }

    pub async fn try_fetch_forecast(&self) -> Result<Vec<ForecastDay>, FetchError> {
        let mut days = self
            .fetch_parsed(DataType::Forecast, parse_forecast)
            .await?;
        days.truncate(self.config.forecast_days);
        Ok(days)
    }
}

/// Maps `weatherForecast[]` one-to-one, keeping source order.
pub fn parse_forecast(payload: Value) -> Result<Vec<ForecastDay>, serde_json::Error> {
    let response: ForecastResponse = serde_json::from_value(payload)?;
    Ok(response
        .weather_forecast
        .into_iter()
        .map(|entry| ForecastDay {
            date: entry.forecast_date,
            weekday: text_or(entry.week, ""),
            max_temp: entry.forecast_maxtemp.value,
            min_temp: entry.forecast_mintemp.value,
            weather: text_or(entry.forecast_weather, ""),
            wind: text_or(entry.forecast_wind, ""),
            max_rh: entry.forecast_maxrh.value,
            min_rh: entry.forecast_minrh.value,
            rain_probability: text_or(entry.psr, ""),
        })
        .collect())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForecastResponse {
    weather_forecast: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForecastEntry {
    forecast_date: String,
    #[serde(default, deserialize_with = "lenient")]
    week: Option<String>,
    forecast_maxtemp: Measurement,
    forecast_mintemp: Measurement,
    #[serde(default, deserialize_with = "lenient")]
    forecast_weather: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    forecast_wind: Option<String>,
    forecast_maxrh: Measurement,
    forecast_minrh: Measurement,
    #[serde(default, rename = "PSR", deserialize_with = "lenient")]
    psr: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Measurement {
    value: f32,
}
