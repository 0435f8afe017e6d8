use crate::{
    app::{dashboard::DashboardSnapshot, settings::RuntimeSettings},
    domain::{
        alerts::{scan_alerts, warning_banner},
        weather::{
            CurrentConditions, Units, condition_icon, forecast_chart_points, format_temp,
            parse_timestamp, round_temp, select_station,
        },
    },
};

/// Plain-text rendering of a snapshot, one fact per line.
#[must_use]
pub fn render_text(snapshot: &DashboardSnapshot, settings: &RuntimeSettings) -> String {
    let mut lines = vec![header_line(snapshot)];

    if let Some(banner) = warning_banner(&snapshot.warnings) {
        lines.push(banner);
        lines.extend(
            scan_alerts(&snapshot.warnings)
                .into_iter()
                .map(|alert| format!("  [{}] {}", alert.icon, alert.message)),
        );
    }

    match &snapshot.current {
        Some(current) => push_current(&mut lines, current, settings),
        None => lines.push("Current conditions unavailable".to_string()),
    }

    let needs_fallback = snapshot
        .current
        .as_ref()
        .is_none_or(|current| current.temperature.is_none());
    if needs_fallback
        && let Some(reading) = select_station(&snapshot.regional, &settings.hko.stations.primary)
    {
        lines.push(format!(
            "Nearest reading: {} {}",
            reading.place,
            format_temp(reading.temperature, settings.units)
        ));
    }

    lines.push(format!("Condition: {}", snapshot.condition.label()));
    push_forecast(&mut lines, snapshot, settings.units);

    if let Some(report) = &snapshot.local_report {
        lines.push(report.general_situation.clone());
        lines.push(format!("Outlook: {}", report.outlook));
    }

    lines.join("\n")
}

fn header_line(snapshot: &DashboardSnapshot) -> String {
    let update_time = snapshot
        .current
        .as_ref()
        .map(|current| current.update_time.as_str())
        .filter(|time| !time.is_empty())
        .or_else(|| {
            snapshot
                .local_report
                .as_ref()
                .map(|report| report.update_time.as_str())
        })
        .and_then(parse_timestamp);

    match update_time {
        Some(time) => format!("Hong Kong weather, updated {}", time.format("%Y-%m-%d %H:%M")),
        None => "Hong Kong weather".to_string(),
    }
}

fn push_current(lines: &mut Vec<String>, current: &CurrentConditions, settings: &RuntimeSettings) {
    let temperature = current
        .temperature
        .map_or_else(|| "--".to_string(), |t| format_temp(t, settings.units));
    let humidity = current
        .humidity
        .map_or_else(|| "--".to_string(), |h| format!("{h:.0}%"));
    lines.push(format!(
        "Now at {}: {} {temperature}, humidity {humidity}",
        settings.hko.stations.primary,
        condition_icon(current.condition, settings.icon_mode),
    ));

    let extras = [
        current.uv_index.map(|uv| format!("UV {uv:.0}")),
        current.rainfall.map(|mm| format!("rainfall {mm:.1} mm")),
        current.wind_speed.map(|kmh| format!("wind {kmh:.1} km/h")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();
    if !extras.is_empty() {
        lines.push(format!("  {}", extras.join(", ")));
    }
}

fn push_forecast(lines: &mut Vec<String>, snapshot: &DashboardSnapshot, units: Units) {
    if snapshot.forecast.is_empty() {
        return;
    }
    lines.push("Forecast".to_string());
    let symbol = units.symbol();
    for (point, day) in forecast_chart_points(&snapshot.forecast, units)
        .into_iter()
        .zip(&snapshot.forecast)
    {
        let row = format!(
            "  {}  {}{symbol} / {}{symbol}  rain {}%  {}",
            point.label,
            round_temp(point.max_temp),
            round_temp(point.min_temp),
            point.rain_probability,
            day.weather,
        );
        lines.push(row.trim_end().to_string());
    }
}
