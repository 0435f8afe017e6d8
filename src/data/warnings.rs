use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::client::{DataType, FetchError, HkoClient, lenient, settle, text_or};
use crate::domain::weather::Warning;

impl HkoClient {
    #[instrument(skip(self))]
    pub async fn fetch_warnings(&self) -> Vec<Warning> {
        settle("warnings", self.try_fetch_warnings().await)
    }

    pub async fn try_fetch_warnings(&self) -> Result<Vec<Warning>, FetchError> {
        self.fetch_parsed(DataType::WarningSummary, parse_warnings)
            .await
    }
}

/// `warnsum` is an object keyed by warning code, not an array. Key order is
/// kept because only the first warning drives condition classification.
pub fn parse_warnings(payload: Value) -> Result<Vec<Warning>, serde_json::Error> {
    if payload.is_null() {
        return Ok(Vec::new());
    }
    let entries: serde_json::Map<String, Value> = serde_json::from_value(payload)?;

    entries
        .into_iter()
        .map(|(key, details)| -> Result<Warning, serde_json::Error> {
            let details: WarningDetails = serde_json::from_value(details)?;
            Ok(Warning {
                name: text_or(details.name, "Unknown Warning"),
                code: text_or(details.code, &key),
                action: text_or(details.action_code, ""),
                issue_time: text_or(details.issue_time, ""),
                update_time: text_or(details.update_time, ""),
            })
        })
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WarningDetails {
    #[serde(default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    code: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    action_code: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    issue_time: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    update_time: Option<String>,
}
