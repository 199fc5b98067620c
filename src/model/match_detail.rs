use serde::Serialize;

/// Full details of a single match page.
#[derive(Debug, Clone, Serialize)]
pub struct MatchDetail {
    pub id: String,
    pub date: String,
    pub unixtime: String,
    pub event: MatchEvent,
    pub format: String,
    pub maps: Vec<MatchMap>,
    pub streams: Vec<MatchStream>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headtohead: Option<HeadToHead>,
    #[serde(flatten)]
    pub layout: MatchLayout,
}

/// The two page layouts a match page can have.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MatchLayout {
    /// Regular page with a teams box, lineups and highlights.
    Teams(TeamsLayout),
    /// Page that only shows a title line instead of the teams.
    ResultsOnly { title: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team1_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team2_id: Option<u32>,
    pub highlights: Vec<Highlight>,
    /// Lineups of team 1 and team 2, in page order.
    pub players: [Vec<String>; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchEvent {
    pub name: String,
    pub link: String,
}

/// A map of the series and its score line, if it was played.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMap {
    pub map: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub link: String,
}

/// A stream or embed link associated with a match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchStream {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub link: String,
}

/// Previous meetings of the two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadToHead {
    pub team1wins: u32,
    pub overtimes: u32,
    pub team2wins: u32,
}

impl MatchDetail {
    pub fn title(&self) -> Option<&str> {
        match &self.layout {
            MatchLayout::ResultsOnly { title } => Some(title),
            MatchLayout::Teams(_) => None,
        }
    }

    pub fn team_names(&self) -> Option<(&str, &str)> {
        match &self.layout {
            MatchLayout::Teams(TeamsLayout {
                team1: Some(team1),
                team2: Some(team2),
                ..
            }) => Some((team1, team2)),
            _ => None,
        }
    }
}
