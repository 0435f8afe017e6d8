use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate};
use regex::Regex;

use super::Units;

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)").expect("leading integer pattern"));

#[must_use]
pub fn convert_temp(celsius: f32, units: Units) -> f32 {
    match units {
        Units::Celsius => celsius,
        Units::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
    }
}

#[must_use]
pub fn round_temp(value: f32) -> i32 {
    value.round() as i32
}

/// `"27.3°C"`, converting first when Fahrenheit is requested.
#[must_use]
pub fn format_temp(celsius: f32, units: Units) -> String {
    format!("{:.1}{}", convert_temp(celsius, units), units.symbol())
}

/// Reads the leading integer of a PSR string such as `"70%"`, capped at 100.
/// Anything without leading digits (`"n/a"`, `"Medium High"`) counts as 0.
#[must_use]
pub fn parse_rain_probability(value: &str) -> u32 {
    LEADING_INTEGER
        .captures(value)
        .and_then(|caps| caps.get(1))
        // Only digits match, so a parse failure means overflow.
        .map_or(0, |digits| digits.as_str().parse::<u32>().unwrap_or(u32::MAX).min(100))
}

#[must_use]
pub fn parse_forecast_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y%m%d").ok()
}

#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok()
}
