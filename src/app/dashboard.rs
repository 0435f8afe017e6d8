use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    data::HkoClient,
    domain::{
        daypart::{BackgroundTheme, TimeOfDay, background_theme, time_of_day_now},
        weather::{
            ConditionCategory, CurrentConditions, ForecastDay, LocalWeatherReport,
            RegionalTemperature, Warning, classify_condition,
        },
    },
};

/// Everything the dashboard shows, fetched in one concurrent round.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub current: Option<CurrentConditions>,
    pub regional: Vec<RegionalTemperature>,
    pub forecast: Vec<ForecastDay>,
    pub warnings: Vec<Warning>,
    pub local_report: Option<LocalWeatherReport>,
    pub condition: ConditionCategory,
    pub time_of_day: TimeOfDay,
    pub background: BackgroundTheme,
    pub fetched_at: DateTime<Utc>,
}

impl DashboardSnapshot {
    pub async fn fetch(client: &HkoClient) -> Self {
        Self::fetch_at(client, time_of_day_now()).await
    }

    #[instrument(skip(client))]
    pub async fn fetch_at(client: &HkoClient, time_of_day: TimeOfDay) -> Self {
        let (current, regional, forecast, warnings, local_report) = futures::join!(
            client.fetch_current_conditions(),
            client.fetch_regional_temperatures(),
            client.fetch_forecast(),
            client.fetch_warnings(),
            client.fetch_local_weather_report(),
        );

        let condition = snapshot_condition(&warnings, local_report.as_ref());
        let snapshot = Self {
            current,
            regional,
            forecast,
            warnings,
            local_report,
            condition,
            time_of_day,
            background: background_theme(condition, time_of_day),
            fetched_at: Utc::now(),
        };

        if snapshot.is_empty() {
            warn!("every weather endpoint came back empty");
        } else {
            info!(
                condition = condition.label(),
                forecast_days = snapshot.forecast.len(),
                warnings = snapshot.warnings.len(),
                "dashboard refreshed"
            );
        }
        snapshot
    }

    /// True when no endpoint produced anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
            && self.regional.is_empty()
            && self.forecast.is_empty()
            && self.warnings.is_empty()
            && self.local_report.is_none()
    }
}

/// The narrative is only consulted when a local report arrived.
#[must_use]
pub fn snapshot_condition(
    warnings: &[Warning],
    local_report: Option<&LocalWeatherReport>,
) -> ConditionCategory {
    let narrative = local_report.map_or("", |report| report.general_situation.as_str());
    classify_condition(warnings, narrative)
}
