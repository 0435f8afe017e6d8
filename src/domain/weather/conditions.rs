use serde::Serialize;

use super::Warning;
use crate::cli::IconMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConditionCategory {
    Sunny,
    Cloudy,
    Rainy,
    Humid,
    Showers,
    Thunderstorms,
    #[serde(rename = "Very Hot")]
    VeryHot,
    Cold,
    Default,
}

impl ConditionCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::Humid => "Humid",
            Self::Showers => "Showers",
            Self::Thunderstorms => "Thunderstorms",
            Self::VeryHot => "Very Hot",
            Self::Cold => "Cold",
            Self::Default => "Default",
        }
    }

    #[must_use]
    pub fn is_wet(self) -> bool {
        matches!(self, Self::Rainy | Self::Showers | Self::Thunderstorms)
    }
}

/// Buckets an HKO weather icon number into the coarse card category.
#[must_use]
pub fn condition_from_icon(icon: u16) -> ConditionCategory {
    match icon {
        80.. => ConditionCategory::Rainy,
        60..=79 => ConditionCategory::Cloudy,
        _ => ConditionCategory::Sunny,
    }
}

const WARNING_KEYWORDS: &[(&str, ConditionCategory)] = &[
    ("rain", ConditionCategory::Rainy),
    ("hot", ConditionCategory::VeryHot),
    ("cold", ConditionCategory::Cold),
    ("thunderstorm", ConditionCategory::Thunderstorms),
];

const NARRATIVE_KEYWORDS: &[(&str, ConditionCategory)] = &[
    ("sunny", ConditionCategory::Sunny),
    ("cloudy", ConditionCategory::Cloudy),
    ("shower", ConditionCategory::Showers),
    ("rain", ConditionCategory::Showers),
    ("humid", ConditionCategory::Humid),
];

/// Only the first warning is consulted; the narrative is the fallback.
/// Table order is match priority.
#[must_use]
pub fn classify_condition(warnings: &[Warning], general_situation: &str) -> ConditionCategory {
    warnings
        .first()
        .and_then(|warning| first_keyword_match(&warning.name, WARNING_KEYWORDS))
        .or_else(|| first_keyword_match(general_situation, NARRATIVE_KEYWORDS))
        .unwrap_or(ConditionCategory::Default)
}

fn first_keyword_match(
    text: &str,
    table: &[(&str, ConditionCategory)],
) -> Option<ConditionCategory> {
    let lowered = text.to_lowercase();
    table
        .iter()
        .find_map(|(needle, category)| lowered.contains(needle).then_some(*category))
}

#[must_use]
pub fn condition_icon(category: ConditionCategory, mode: IconMode) -> &'static str {
    let (ascii, emoji, unicode) = icon_tokens(category);
    match mode {
        IconMode::Ascii => ascii,
        IconMode::Emoji => emoji,
        IconMode::Unicode => unicode,
    }
}

fn icon_tokens(category: ConditionCategory) -> (&'static str, &'static str, &'static str) {
    match category {
        ConditionCategory::Sunny => ("SUN", "☀️", "☀"),
        ConditionCategory::Rainy | ConditionCategory::Showers => ("RAN", "🌧️", "☂"),
        ConditionCategory::Thunderstorms => ("THN", "⛈️", "⚡"),
        ConditionCategory::Humid => ("HUM", "💧", "≈"),
        ConditionCategory::VeryHot => ("HOT", "🌡️", "▲"),
        ConditionCategory::Cold => ("CLD", "❄️", "❄"),
        ConditionCategory::Cloudy | ConditionCategory::Default => ("CLO", "☁️", "☁"),
    }
}
