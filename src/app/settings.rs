use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    cli::{Cli, IconMode},
    data::HkoConfig,
    domain::weather::Units,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeSettings {
    #[serde(default = "default_units")]
    pub units: Units,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: IconMode,
    #[serde(default)]
    pub hko: HkoConfig,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            units: default_units(),
            icon_mode: default_icon_mode(),
            hko: HkoConfig::default(),
        }
    }
}

const fn default_units() -> Units {
    Units::Celsius
}

const fn default_icon_mode() -> IconMode {
    IconMode::Unicode
}

impl RuntimeSettings {
    #[must_use]
    pub fn from_cli_defaults(cli: &Cli) -> Self {
        let mut settings = Self::default();
        apply_cli_overrides(&mut settings, cli);
        settings
    }
}

/// Effective settings plus the path they persist to, if any.
pub fn load_runtime_settings(cli: &Cli, enable_disk: bool) -> (RuntimeSettings, Option<PathBuf>) {
    if !enable_disk {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    }
    load_runtime_settings_from(cli, settings_path())
}

pub(crate) fn load_runtime_settings_from(
    cli: &Cli,
    path: Option<PathBuf>,
) -> (RuntimeSettings, Option<PathBuf>) {
    let Some(path) = path else {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    };

    let mut settings = match fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str::<RuntimeSettings>(&content) {
            Ok(mut saved) => {
                clamp_saved_config(&mut saved.hko);
                saved
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring invalid settings file");
                RuntimeSettings::default()
            }
        },
        Err(err) => {
            debug!(path = %path.display(), error = %err, "no saved settings");
            RuntimeSettings::default()
        }
    };

    apply_cli_overrides(&mut settings, cli);
    (settings, Some(path))
}

const MAX_FORECAST_DAYS: usize = 9;

/// Holds file values to the same ranges the CLI flags enforce.
fn clamp_saved_config(hko: &mut HkoConfig) {
    if hko.timeout_secs == Some(0) {
        warn!("ignoring zero timeout from settings file");
        hko.timeout_secs = None;
    }
    let days = hko.forecast_days.clamp(1, MAX_FORECAST_DAYS);
    if days != hko.forecast_days {
        warn!(saved = hko.forecast_days, used = days, "forecast days out of range");
        hko.forecast_days = days;
    }
}

fn apply_cli_overrides(settings: &mut RuntimeSettings, cli: &Cli) {
    if let Some(units) = cli.units {
        settings.units = units.into();
    }
    if let Some(icon_mode) = cli.icon_mode_override() {
        settings.icon_mode = icon_mode;
    }

    let hko = &mut settings.hko;
    if let Some(station) = &cli.station {
        hko.stations.primary.clone_from(station);
    }
    if let Some(station) = &cli.uv_station {
        hko.stations.uv.clone_from(station);
    }
    if let Some(district) = &cli.rainfall_district {
        hko.stations.rainfall_district.clone_from(district);
    }
    if let Some(lang) = cli.lang {
        hko.lang = lang.into();
    }
    if let Some(base_url) = &cli.base_url {
        hko.base_url.clone_from(base_url);
    }
    if let Some(secs) = cli.timeout {
        hko.timeout_secs = Some(secs);
    }
    if let Some(secs) = cli.cache_ttl {
        hko.cache_ttl_secs = secs;
    }
    if let Some(days) = cli.forecast_days {
        hko.forecast_days = usize::from(days);
    }
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("HK_WEATHER_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("hk-weather")
            .join("settings.json"),
    )
}
