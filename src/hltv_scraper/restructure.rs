//! Turns the raw records produced by the page parsers into the public record
//! shapes. Each builder only ever constructs the fields valid for its variant.

use std::str::FromStr;

use strum_macros::EnumString;

use crate::decode::is_best_of;
use crate::model::{
    HeadToHead, Highlight, MatchDetail, MatchEvent, MatchLayout, MatchMap, MatchStream,
    MatchSummary, PlaceholderMatch, ResultSummary, TeamMatch, TeamsLayout,
};

pub(crate) const SINGLE_MAP_FORMAT: &str = "Best of 1";

/// Values the time cell shows instead of a schedule.
#[derive(Debug, EnumString)]
enum TimeSentinel {
    #[strum(serialize = "LIVE")]
    Live,
    Finished,
}

/// A match row as read from the matches page.
#[derive(Debug)]
pub(crate) struct RawMatchRow {
    pub id: String,
    pub link: String,
    pub date: String,
    pub unixtime: String,
    pub time: Option<String>,
    pub format: String,
    pub kind: RawMatchKind,
}

#[derive(Debug)]
pub(crate) enum RawMatchKind {
    Live(RawTeams),
    Upcoming(RawTeams),
    Placeholder { label: Option<String> },
}

#[derive(Debug)]
pub(crate) struct RawTeams {
    pub team1: String,
    pub team1_id: Option<u32>,
    pub team2: String,
    pub team2_id: Option<u32>,
    pub event_id: Option<u32>,
    pub event_name: Option<String>,
}

#[derive(Debug)]
pub(crate) struct RawResultRow {
    pub id: String,
    pub team1: String,
    pub team1_id: Option<u32>,
    pub team2: String,
    pub team2_id: Option<u32>,
    pub format: String,
    pub result: Option<String>,
    pub unixtime: String,
}

#[derive(Debug)]
pub(crate) struct RawMatchPage {
    pub id: String,
    pub teams: Option<RawPageTeams>,
    pub date: String,
    pub unixtime: String,
    pub event: MatchEvent,
    pub format: String,
    pub maps: Vec<MatchMap>,
    pub highlights: Vec<Highlight>,
    pub streams: Vec<MatchStream>,
    pub players: [Vec<String>; 2],
    pub headtohead: Option<HeadToHead>,
    pub title: Option<String>,
}

#[derive(Debug)]
pub(crate) struct RawPageTeams {
    pub team1: String,
    pub team1_id: Option<u32>,
    pub team2: String,
    pub team2_id: Option<u32>,
}

/// Keep the time only if it is a real schedule, not a status sentinel.
fn scheduled_time(time: Option<String>) -> Option<String> {
    time.filter(|t| !t.is_empty() && TimeSentinel::from_str(t).is_err())
}

/// Split a format into `(format, map)`.
///
/// Single-map matches show the map name where the series length would be, so
/// the map is moved out and the format becomes [`SINGLE_MAP_FORMAT`].
fn split_format(format: String) -> (String, Option<String>) {
    if is_best_of(&format) {
        (format, None)
    } else {
        (SINGLE_MAP_FORMAT.to_string(), Some(format))
    }
}

pub(crate) fn match_summary(raw: RawMatchRow) -> MatchSummary {
    let RawMatchRow {
        id,
        link,
        date,
        unixtime,
        time,
        format,
        kind,
    } = raw;
    let time = scheduled_time(time);
    let (format, map) = split_format(format);

    let (teams, live) = match kind {
        RawMatchKind::Live(teams) => (teams, true),
        RawMatchKind::Upcoming(teams) => (teams, false),
        RawMatchKind::Placeholder { label } => {
            return MatchSummary::Placeholder(PlaceholderMatch {
                id,
                label,
                format,
                date,
                unixtime,
                time,
                link,
            });
        }
    };

    let team_match = TeamMatch {
        id,
        team1: teams.team1,
        team1_id: teams.team1_id,
        team2: teams.team2,
        team2_id: teams.team2_id,
        format,
        map,
        event_id: teams.event_id,
        event_name: teams.event_name,
        live,
        finished: false,
        date,
        unixtime,
        time,
        link,
    };
    if live {
        MatchSummary::Live(team_match)
    } else {
        MatchSummary::Upcoming(team_match)
    }
}

pub(crate) fn result_summary(raw: RawResultRow) -> ResultSummary {
    let (format, map) = split_format(raw.format);
    ResultSummary {
        id: raw.id,
        team1: raw.team1,
        team1_id: raw.team1_id,
        team2: raw.team2,
        team2_id: raw.team2_id,
        format,
        map,
        result: raw.result,
        unixtime: raw.unixtime,
    }
}

pub(crate) fn match_detail(raw: RawMatchPage) -> MatchDetail {
    let layout = match raw.title.filter(|t| !t.is_empty()) {
        Some(title) => MatchLayout::ResultsOnly { title },
        None => {
            let (team1, team1_id, team2, team2_id) = match raw.teams {
                Some(t) => (Some(t.team1), t.team1_id, Some(t.team2), t.team2_id),
                None => (None, None, None, None),
            };
            MatchLayout::Teams(TeamsLayout {
                team1,
                team1_id,
                team2,
                team2_id,
                highlights: raw.highlights,
                players: raw.players,
            })
        }
    };

    MatchDetail {
        id: raw.id,
        date: raw.date,
        unixtime: raw.unixtime,
        event: raw.event,
        format: raw.format,
        maps: raw.maps,
        streams: raw.streams,
        headtohead: raw.headtohead,
        layout,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn raw_row(format: &str, time: Option<&str>, kind: RawMatchKind) -> RawMatchRow {
        RawMatchRow {
            id: "555".to_string(),
            link: "/matches/555/alpha-vs-beta".to_string(),
            date: "Jan 1st".to_string(),
            unixtime: "1700000000000".to_string(),
            time: time.map(str::to_string),
            format: format.to_string(),
            kind,
        }
    }

    fn teams(team1_id: Option<u32>) -> RawTeams {
        RawTeams {
            team1: "Alpha".to_string(),
            team1_id,
            team2: "Beta".to_string(),
            team2_id: Some(2),
            event_id: Some(4872),
            event_name: Some("Major".to_string()),
        }
    }

    fn keys(summary: &MatchSummary) -> serde_json::Map<String, Value> {
        match serde_json::to_value(summary).unwrap() {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_single_map_format_moves_to_map() {
        for format in ["mirage", "nuke", "Inferno"] {
            let summary =
                match_summary(raw_row(format, None, RawMatchKind::Upcoming(teams(Some(1)))));
            let MatchSummary::Upcoming(m) = summary else {
                panic!("expected upcoming match");
            };
            assert_eq!(m.format, SINGLE_MAP_FORMAT);
            assert_eq!(m.map.as_deref(), Some(format));
        }
    }

    #[test]
    fn test_best_of_format_is_kept() {
        let summary = match_summary(raw_row("bo3", None, RawMatchKind::Live(teams(Some(1)))));
        let MatchSummary::Live(m) = summary else {
            panic!("expected live match");
        };
        assert_eq!(m.format, "bo3");
        assert!(m.map.is_none());
        assert!(m.live);
        assert!(!m.finished);
    }

    #[test]
    fn test_time_sentinels_are_dropped() {
        for sentinel in ["LIVE", "Finished", ""] {
            let summary = match_summary(raw_row(
                "bo1",
                Some(sentinel),
                RawMatchKind::Upcoming(teams(Some(1))),
            ));
            assert!(!keys(&summary).contains_key("time"), "{sentinel:?} kept");
        }

        let summary = match_summary(raw_row(
            "bo1",
            Some("18:00"),
            RawMatchKind::Upcoming(teams(Some(1))),
        ));
        assert_eq!(keys(&summary)["time"], "18:00");
    }

    #[test]
    fn test_placeholder_has_no_team_fields() {
        let summary = match_summary(raw_row(
            "unknown",
            Some("20:00"),
            RawMatchKind::Placeholder {
                label: Some("Winner of A vs B".to_string()),
            },
        ));
        let keys = keys(&summary);
        for key in ["team1", "team1Id", "team2", "team2Id", "live", "finished", "map"] {
            assert!(!keys.contains_key(key), "placeholder has {key}");
        }
        assert_eq!(keys["label"], "Winner of A vs B");
        assert_eq!(keys["format"], SINGLE_MAP_FORMAT);
        assert_eq!(summary.label(), Some("Winner of A vs B"));
    }

    #[test]
    fn test_team_match_has_no_label_and_omits_missing_ids() {
        let summary = match_summary(raw_row("bo3", None, RawMatchKind::Upcoming(teams(None))));
        let keys = keys(&summary);
        assert!(!keys.contains_key("label"));
        assert!(!keys.contains_key("team1Id"));
        assert_eq!(keys["team2Id"], 2);
        assert_eq!(keys["eventId"], 4872);
        assert_eq!(keys["eventName"], "Major");
    }

    #[test]
    fn test_result_summary_splits_format() {
        let result = result_summary(RawResultRow {
            id: "1".to_string(),
            team1: "Alpha".to_string(),
            team1_id: None,
            team2: "Beta".to_string(),
            team2_id: Some(2),
            format: "ancient".to_string(),
            result: Some("16 - 14".to_string()),
            unixtime: "1700000000000".to_string(),
        });
        assert_eq!(result.format, SINGLE_MAP_FORMAT);
        assert_eq!(result.map.as_deref(), Some("ancient"));

        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("team1Id").is_none());
        assert_eq!(value["team2Id"], 2);
    }

    fn raw_page(title: Option<&str>) -> RawMatchPage {
        RawMatchPage {
            id: "555".to_string(),
            teams: Some(RawPageTeams {
                team1: "Alpha".to_string(),
                team1_id: Some(1),
                team2: "Beta".to_string(),
                team2_id: None,
            }),
            date: "1st of January 2024".to_string(),
            unixtime: "1704067200000".to_string(),
            event: MatchEvent {
                name: "Major".to_string(),
                link: "https://www.hltv.org/events/1/major".to_string(),
            },
            format: "Best of 3 (LAN)".to_string(),
            maps: vec![],
            highlights: vec![Highlight {
                name: Some("ace".to_string()),
                link: "https://clips.example/1".to_string(),
            }],
            streams: vec![],
            players: [vec!["a".to_string()], vec!["b".to_string()]],
            headtohead: None,
            title: title.map(str::to_string),
        }
    }

    #[test]
    fn test_match_detail_with_title_drops_team_fields() {
        let detail = match_detail(raw_page(Some("Grand final")));
        assert_eq!(detail.title(), Some("Grand final"));
        let value = serde_json::to_value(&detail).unwrap();
        for key in ["team1", "team1Id", "team2", "team2Id", "highlights", "players"] {
            assert!(value.get(key).is_none(), "titled page has {key}");
        }
        assert_eq!(value["title"], "Grand final");
    }

    #[test]
    fn test_match_detail_without_title_keeps_teams() {
        let detail = match_detail(raw_page(Some("")));
        assert_eq!(detail.team_names(), Some(("Alpha", "Beta")));
        let value = serde_json::to_value(&detail).unwrap();
        assert!(value.get("title").is_none());
        assert!(value.get("team2Id").is_none());
        assert_eq!(value["team1Id"], 1);
        assert_eq!(value["players"][1][0], "b");
        assert!(value.get("headtohead").is_none());
    }
}
