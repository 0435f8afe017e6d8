use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::client::{DataType, FetchError, HkoClient, ReferenceStations, lenient, settle, text_or};
use crate::domain::weather::{
    ConditionCategory, CurrentConditions, RegionalTemperature, condition_from_icon,
};

impl HkoClient {
    #[instrument(skip(self))]
    pub async fn fetch_current_conditions(&self) -> Option<CurrentConditions> {
        settle(
            "current conditions",
            self.try_fetch_current_conditions().await.map(Some),
        )
    }

    pub async fn try_fetch_current_conditions(&self) -> Result<CurrentConditions, FetchError> {
        let stations = &self.config.stations;
        self.fetch_parsed(DataType::CurrentReport, |payload| {
            parse_current_conditions(payload, stations)
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn fetch_regional_temperatures(&self) -> Vec<RegionalTemperature> {
        settle(
            "regional temperatures",
            self.try_fetch_regional_temperatures().await,
        )
    }

    pub async fn try_fetch_regional_temperatures(
        &self,
    ) -> Result<Vec<RegionalTemperature>, FetchError> {
        self.fetch_parsed(DataType::CurrentReport, parse_regional_temperatures)
            .await
    }
}

/// Maps a `rhrread` payload onto the configured reference stations.
pub fn parse_current_conditions(
    payload: Value,
    stations: &ReferenceStations,
) -> Result<CurrentConditions, serde_json::Error> {
    let report: CurrentReport = serde_json::from_value(payload)?;

    let condition = report
        .icon
        .as_ref()
        .and_then(|icons| icons.first().copied())
        .map_or(ConditionCategory::Default, condition_from_icon);

    Ok(CurrentConditions {
        temperature: reading_at(Some(&report.temperature), &stations.primary)
            .and_then(|r| r.value),
        humidity: reading_at(Some(&report.humidity), &stations.primary).and_then(|r| r.value),
        condition,
        update_time: text_or(report.update_time, ""),
        rainfall: reading_at(report.rainfall.as_ref(), &stations.rainfall_district)
            .and_then(|r| r.max.or(r.value)),
        uv_index: reading_at(report.uvindex.as_ref(), &stations.uv).and_then(|r| r.value),
        wind_speed: reading_at(report.wind.as_ref(), &stations.primary).and_then(|r| r.value),
    })
}

/// Every station in `temperature.data`, in published order.
pub fn parse_regional_temperatures(
    payload: Value,
) -> Result<Vec<RegionalTemperature>, serde_json::Error> {
    let report: TemperatureReport = serde_json::from_value(payload)?;
    let block_time = report.temperature.record_time;

    Ok(report
        .temperature
        .data
        .into_iter()
        .map(|reading| RegionalTemperature {
            place: text_or(reading.place, "Unknown"),
            temperature: reading.value.unwrap_or_default(),
            unit: text_or(reading.unit, "C"),
            record_time: text_or(reading.record_time.or_else(|| block_time.clone()), ""),
        })
        .collect())
}

fn reading_at<'a>(block: Option<&'a StationBlock>, place: &str) -> Option<&'a StationReading> {
    block?
        .data
        .iter()
        .find(|reading| reading.place.as_deref() == Some(place))
}

#[derive(Debug, Deserialize)]
struct CurrentReport {
    temperature: StationBlock,
    humidity: StationBlock,
    #[serde(default, deserialize_with = "lenient")]
    rainfall: Option<StationBlock>,
    #[serde(default, deserialize_with = "lenient")]
    uvindex: Option<StationBlock>,
    #[serde(default, deserialize_with = "lenient")]
    wind: Option<StationBlock>,
    #[serde(default, deserialize_with = "lenient")]
    icon: Option<Vec<u16>>,
    #[serde(default, rename = "updateTime", deserialize_with = "lenient")]
    update_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TemperatureReport {
    temperature: StationBlock,
}

#[derive(Debug, Deserialize)]
struct StationBlock {
    #[serde(default)]
    data: Vec<StationReading>,
    #[serde(default, rename = "recordTime", deserialize_with = "lenient")]
    record_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StationReading {
    #[serde(default, deserialize_with = "lenient")]
    place: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    value: Option<f32>,
    #[serde(default, deserialize_with = "lenient")]
    max: Option<f32>,
    #[serde(default, deserialize_with = "lenient")]
    unit: Option<String>,
    #[serde(default, rename = "recordTime", deserialize_with = "lenient")]
    record_time: Option<String>,
}
