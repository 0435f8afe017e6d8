#![allow(clippy::missing_errors_doc)]

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::{data::Language, domain::weather::Units};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Celsius,
    Fahrenheit,
}

impl From<UnitsArg> for Units {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Celsius => Self::Celsius,
            UnitsArg::Fahrenheit => Self::Fahrenheit,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LangArg {
    En,
    Tc,
    Sc,
}

impl From<LangArg> for Language {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Tc => Self::Tc,
            LangArg::Sc => Self::Sc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "hk-weather",
    version,
    about = "Hong Kong Observatory weather snapshot"
)]
pub struct Cli {
    /// Reference station for temperature and humidity (default: Hong Kong Observatory)
    #[arg(long)]
    pub station: Option<String>,

    /// Station reporting the UV index (default: King's Park)
    #[arg(long)]
    pub uv_station: Option<String>,

    /// District used for rainfall (default: Yau Tsim Mong)
    #[arg(long)]
    pub rainfall_district: Option<String>,

    /// Display units
    #[arg(long, value_enum)]
    pub units: Option<UnitsArg>,

    /// Upstream text language
    #[arg(long, value_enum)]
    pub lang: Option<LangArg>,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Override the weather endpoint
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Reuse responses for this many seconds (0 disables)
    #[arg(long)]
    pub cache_ttl: Option<u64>,

    /// Number of forecast days to keep (1..=9)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub forecast_days: Option<u8>,

    /// Print the snapshot as JSON
    #[arg(long)]
    pub json: bool,

    /// Re-fetch every N seconds until interrupted
    #[arg(long, value_parser = clap::value_parser!(u64).range(10..))]
    pub watch: Option<u64>,

    /// Persist the effective settings
    #[arg(long)]
    pub save_settings: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(url) = self.base_url.as_deref()
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            anyhow::bail!("--base-url must be an http(s) URL");
        }
        Ok(())
    }

    #[must_use]
    pub fn icon_mode_override(&self) -> Option<IconMode> {
        if self.ascii_icons {
            Some(IconMode::Ascii)
        } else if self.emoji_icons {
            Some(IconMode::Emoji)
        } else {
            None
        }
    }
}
