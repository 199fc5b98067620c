use chrono::{DateTime, Utc};
use serde::Serialize;

use super::common::parse_unix_millis;

/// All matches currently shown on the matches page, live rows first.
pub type MatchList = Vec<MatchSummary>;

/// A single row from the matches page.
///
/// Serialized untagged: each variant produces one flat object holding only the
/// keys valid for that kind of row.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MatchSummary {
    Live(TeamMatch),
    Upcoming(TeamMatch),
    /// A scheduled match whose teams are not decided yet.
    Placeholder(PlaceholderMatch),
}

/// A match row where both teams are known.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMatch {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    pub live: bool,
    pub finished: bool,
    pub date: String,
    pub unixtime: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub link: String,
}

/// A match row with a label in place of the teams.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderMatch {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub format: String,
    pub date: String,
    pub unixtime: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub link: String,
}

impl MatchSummary {
    pub fn id(&self) -> &str {
        match self {
            MatchSummary::Live(m) | MatchSummary::Upcoming(m) => &m.id,
            MatchSummary::Placeholder(m) => &m.id,
        }
    }

    pub fn link(&self) -> &str {
        match self {
            MatchSummary::Live(m) | MatchSummary::Upcoming(m) => &m.link,
            MatchSummary::Placeholder(m) => &m.link,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, MatchSummary::Live(_))
    }

    /// The placeholder label, if the teams are not known yet.
    pub fn label(&self) -> Option<&str> {
        match self {
            MatchSummary::Placeholder(m) => m.label.as_deref(),
            _ => None,
        }
    }

    /// Both team names, if the teams are known.
    pub fn teams(&self) -> Option<(&str, &str)> {
        match self {
            MatchSummary::Live(m) | MatchSummary::Upcoming(m) => Some((&m.team1, &m.team2)),
            MatchSummary::Placeholder(_) => None,
        }
    }

    /// Scheduled start, decoded from the `unixtime` attribute.
    ///
    /// Live rows carry the `"Now"` sentinel and return `None`.
    pub fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        let unixtime = match self {
            MatchSummary::Live(m) | MatchSummary::Upcoming(m) => &m.unixtime,
            MatchSummary::Placeholder(m) => &m.unixtime,
        };
        parse_unix_millis(unixtime)
    }
}
