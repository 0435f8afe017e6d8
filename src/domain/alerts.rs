use crate::domain::weather::Warning;

#[derive(Debug, Clone)]
pub struct WeatherAlert {
    pub icon: &'static str,
    pub message: String,
    pub severity: AlertSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertSeverity {
    Info,
    Warning,
    Danger,
}

const DANGER_CODES: &[&str] = &[
    "WRAINR", "WRAINB", "TC8NE", "TC8SE", "TC8SW", "TC8NW", "TC9", "TC10", "WTMW",
];

const WARNING_CODES: &[&str] = &[
    "WRAINA", "WTS", "WL", "WFNTSA", "TC3", "WFIRER", "WHOT", "WCOLD", "WMSGNL",
];

#[must_use]
pub fn warning_severity(warning: &Warning) -> AlertSeverity {
    let code = warning.code.to_ascii_uppercase();
    if DANGER_CODES.contains(&code.as_str()) {
        AlertSeverity::Danger
    } else if WARNING_CODES.contains(&code.as_str()) {
        AlertSeverity::Warning
    } else {
        AlertSeverity::Info
    }
}

/// Warnings still in force, most severe first. Ties keep upstream order.
#[must_use]
pub fn scan_alerts(warnings: &[Warning]) -> Vec<WeatherAlert> {
    let mut alerts: Vec<WeatherAlert> = warnings
        .iter()
        .filter(|warning| !warning.is_cancelled())
        .map(|warning| {
            let severity = warning_severity(warning);
            WeatherAlert {
                icon: severity_icon(severity),
                message: warning.name.clone(),
                severity,
            }
        })
        .collect();

    alerts.sort_by(|a, b| b.severity.cmp(&a.severity));
    alerts
}

/// `"Active Weather Warnings: A, B"`, or `None` when nothing is listed.
#[must_use]
pub fn warning_banner(warnings: &[Warning]) -> Option<String> {
    if warnings.is_empty() {
        return None;
    }
    let names = warnings
        .iter()
        .map(|warning| warning.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("Active Weather Warnings: {names}"))
}

fn severity_icon(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Danger => "!!",
        AlertSeverity::Warning => "!",
        AlertSeverity::Info => "i",
    }
}
