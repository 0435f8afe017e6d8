use serde::{Deserialize, Serialize};

mod conditions;
mod conversions;

pub use conditions::{ConditionCategory, classify_condition, condition_from_icon, condition_icon};
pub use conversions::{
    convert_temp, format_temp, parse_forecast_date, parse_rain_probability, parse_timestamp,
    round_temp,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Units {
    Celsius,
    Fahrenheit,
}

impl Units {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// Conditions at the reference station, gathered from the per-metric arrays
/// of the current weather report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature: Option<f32>,
    pub humidity: Option<f32>,
    pub condition: ConditionCategory,
    pub update_time: String,
    pub rainfall: Option<f32>,
    pub uv_index: Option<f32>,
    pub wind_speed: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalTemperature {
    pub place: String,
    pub temperature: f32,
    pub unit: String,
    pub record_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    /// `YYYYMMDD`, as published.
    pub date: String,
    pub weekday: String,
    pub max_temp: f32,
    pub min_temp: f32,
    pub weather: String,
    pub wind: String,
    pub max_rh: f32,
    pub min_rh: f32,
    /// Formatted percentage such as `"70%"`; see [`parse_rain_probability`].
    pub rain_probability: String,
}

impl ForecastDay {
    #[must_use]
    pub fn rain_probability_pct(&self) -> u32 {
        parse_rain_probability(&self.rain_probability)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub name: String,
    pub code: String,
    pub action: String,
    pub issue_time: String,
    pub update_time: String,
}

impl Warning {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.action.eq_ignore_ascii_case("CANCEL")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalWeatherReport {
    pub general_situation: String,
    pub forecast_period: String,
    pub forecast_description: String,
    pub outlook: String,
    pub update_time: String,
}

/// One row of the multi-day temperature/rain chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastChartPoint {
    pub label: String,
    pub max_temp: f32,
    pub min_temp: f32,
    pub rain_probability: u32,
}

#[must_use]
pub fn forecast_chart_points(days: &[ForecastDay], units: Units) -> Vec<ForecastChartPoint> {
    days.iter()
        .map(|day| ForecastChartPoint {
            label: parse_forecast_date(&day.date)
                .map(|date| date.format("%b %-d").to_string())
                .unwrap_or_else(|| day.date.clone()),
            max_temp: convert_temp(day.max_temp, units),
            min_temp: convert_temp(day.min_temp, units),
            rain_probability: day.rain_probability_pct(),
        })
        .collect()
}

/// Picks the reading for `place`, falling back to the first station listed.
#[must_use]
pub fn select_station<'a>(
    regional: &'a [RegionalTemperature],
    place: &str,
) -> Option<&'a RegionalTemperature> {
    regional
        .iter()
        .find(|reading| reading.place == place)
        .or_else(|| regional.first())
}
