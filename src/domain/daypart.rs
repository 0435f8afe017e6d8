use chrono::{Local, Timelike};
use serde::Serialize;

use super::weather::ConditionCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundTheme {
    SunnyMorning,
    Rainy,
    Cloudy,
    Night,
    Default,
}

#[must_use]
pub fn classify_time_of_day(hour: u32) -> TimeOfDay {
    match hour {
        6..=11 => TimeOfDay::Morning,
        12..=17 => TimeOfDay::Afternoon,
        _ => TimeOfDay::Night,
    }
}

#[must_use]
pub fn time_of_day_now() -> TimeOfDay {
    classify_time_of_day(Local::now().hour())
}

#[must_use]
pub fn background_theme(condition: ConditionCategory, time_of_day: TimeOfDay) -> BackgroundTheme {
    if condition == ConditionCategory::Sunny && time_of_day == TimeOfDay::Morning {
        return BackgroundTheme::SunnyMorning;
    }
    if condition.is_wet() {
        return BackgroundTheme::Rainy;
    }
    if condition == ConditionCategory::Cloudy {
        return BackgroundTheme::Cloudy;
    }
    if time_of_day == TimeOfDay::Night {
        return BackgroundTheme::Night;
    }
    BackgroundTheme::Default
}
