use std::{fmt, sync::Arc, time::Duration};

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::cache::PayloadCache;

const WEATHER_URL: &str = "https://data.weather.gov.hk/weatherAPI/opendata/weather.php";

/// The `dataType` values this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// `rhrread`, the current weather report.
    CurrentReport,
    /// `fnd`, the nine-day forecast.
    Forecast,
    /// `warnsum`, the warning summary.
    WarningSummary,
    /// `flw`, the local forecast narrative.
    LocalForecast,
}

impl DataType {
    pub const ALL: [Self; 4] = [
        Self::CurrentReport,
        Self::Forecast,
        Self::WarningSummary,
        Self::LocalForecast,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CurrentReport => "rhrread",
            Self::Forecast => "fnd",
            Self::WarningSummary => "warnsum",
            Self::LocalForecast => "flw",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    /// Traditional Chinese.
    Tc,
    /// Simplified Chinese.
    Sc,
}

impl Language {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tc => "tc",
            Self::Sc => "sc",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Station names used to pick "current conditions" out of the per-metric arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceStations {
    /// Temperature, humidity and wind.
    #[serde(default = "default_primary_station")]
    pub primary: String,
    #[serde(default = "default_uv_station")]
    pub uv: String,
    #[serde(default = "default_rainfall_district")]
    pub rainfall_district: String,
}

impl Default for ReferenceStations {
    fn default() -> Self {
        Self {
            primary: default_primary_station(),
            uv: default_uv_station(),
            rainfall_district: default_rainfall_district(),
        }
    }
}

fn default_primary_station() -> String {
    "Hong Kong Observatory".to_string()
}

fn default_uv_station() -> String {
    "King's Park".to_string()
}

fn default_rainfall_district() -> String {
    "Yau Tsim Mong".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HkoConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub lang: Language,

    #[serde(default)]
    pub stations: ReferenceStations,

    /// Forecast entries kept per fetch.
    #[serde(default = "default_forecast_days")]
    pub forecast_days: usize,

    /// Request timeout; `None` leaves reqwest's default in place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Response cache lifetime; 0 disables caching.
    #[serde(default)]
    pub cache_ttl_secs: u64,
}

fn default_base_url() -> String {
    WEATHER_URL.to_string()
}

const fn default_forecast_days() -> usize {
    9
}

impl Default for HkoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            lang: Language::default(),
            stations: ReferenceStations::default(),
            forecast_days: default_forecast_days(),
            timeout_secs: None,
            cache_ttl_secs: 0,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("{data_type} request failed")]
    Transport {
        data_type: DataType,
        #[source]
        source: reqwest::Error,
    },

    #[error("{data_type} request returned {status}")]
    Status {
        data_type: DataType,
        status: StatusCode,
    },

    #[error("{data_type} payload has an unexpected shape")]
    Decode {
        data_type: DataType,
        #[source]
        source: serde_json::Error,
    },
}

/// Client for the HKO open-data weather endpoint.
///
/// Every `fetch_*` method is infallible from the caller's side: failures are
/// logged and reported as an empty list or `None`. The matching `try_fetch_*`
/// methods expose the underlying [`FetchError`].
#[derive(Debug, Clone)]
pub struct HkoClient {
    client: Client,
    pub(crate) config: HkoConfig,
    cache: Option<Arc<PayloadCache>>,
}

impl HkoClient {
    pub fn new(config: HkoConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(FetchError::Client)?;
        let cache = (config.cache_ttl_secs > 0)
            .then(|| Arc::new(PayloadCache::new(Duration::from_secs(config.cache_ttl_secs))));

        Ok(Self {
            client,
            config,
            cache,
        })
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::new(HkoConfig {
            base_url: base_url.into(),
            ..HkoConfig::default()
        })
    }

    #[must_use]
    pub fn config(&self) -> &HkoConfig {
        &self.config
    }

    pub(crate) async fn fetch_parsed<T>(
        &self,
        data_type: DataType,
        parse: impl FnOnce(Value) -> Result<T, serde_json::Error>,
    ) -> Result<T, FetchError> {
        if let Some(payload) = self.cache.as_ref().and_then(|cache| cache.get(data_type)) {
            debug!(%data_type, "serving cached payload");
            return parse(payload).map_err(|source| FetchError::Decode { data_type, source });
        }

        let payload = self.fetch_value(data_type).await?;
        let Some(cache) = &self.cache else {
            return parse(payload).map_err(|source| FetchError::Decode { data_type, source });
        };

        // Only payloads that decode are kept.
        let parsed = parse(payload.clone())
            .map_err(|source| FetchError::Decode { data_type, source })?;
        cache.put(data_type, payload);
        Ok(parsed)
    }

    async fn fetch_value(&self, data_type: DataType) -> Result<Value, FetchError> {
        debug!(%data_type, lang = %self.config.lang, "requesting weather data");
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("dataType", data_type.as_str()),
                ("lang", self.config.lang.as_str()),
            ])
            .send()
            .await
            .map_err(|source| FetchError::Transport { data_type, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { data_type, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { data_type, source })?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { data_type, source })
    }
}

/// Collapses a failed fetch into the operation's empty value.
pub(crate) fn settle<T: Default>(operation: &'static str, result: Result<T, FetchError>) -> T {
    result.unwrap_or_else(|err| {
        warn!(operation, error = ?err, "fetch failed; returning empty result");
        T::default()
    })
}

/// Accepts any JSON for an optional field and keeps it only if it has the
/// expected type. HKO sends `""` in place of absent objects.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Treats absent, `null` and empty strings alike.
pub(crate) fn text_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
