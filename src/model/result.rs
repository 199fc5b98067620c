use chrono::{DateTime, Utc};
use serde::Serialize;

use super::common::parse_unix_millis;

/// Options for [`crate::HltvClient::list_results`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsOptions {
    /// Number of result pages to read, 100 results per page. Must be at least 1.
    pub pages: u32,
}

impl Default for ResultsOptions {
    fn default() -> Self {
        Self { pages: 1 }
    }
}

/// A finished match from the results pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub id: String,
    pub team1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team1_id: Option<u32>,
    pub team2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team2_id: Option<u32>,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
    /// Score line; absent when the site obfuscated it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    pub unixtime: String,
}

impl ResultSummary {
    pub fn played_at(&self) -> Option<DateTime<Utc>> {
        parse_unix_millis(&self.unixtime)
    }
}
