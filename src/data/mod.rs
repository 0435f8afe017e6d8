//! Normalization of the HKO open-data weather endpoints into domain records.

pub mod cache;
pub mod client;
pub mod current;
pub mod forecast;
pub mod local_report;
pub mod warnings;

pub use client::{DataType, FetchError, HkoClient, HkoConfig, Language, ReferenceStations};
pub use current::{parse_current_conditions, parse_regional_temperatures};
pub use forecast::parse_forecast;
pub use local_report::parse_local_weather_report;
pub use warnings::parse_warnings;
