use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use crate::decode::{decode_map_name, decode_team_id_from_logo};
use crate::error::{DecodeWarning, Result};
use crate::hltv_scraper::restructure::{self, RawMatchPage, RawPageTeams};
use crate::hltv_scraper::{self, absolute_url, select_attr, select_text, Diagnostics};
use crate::model::{HeadToHead, Highlight, MatchDetail, MatchEvent, MatchMap, MatchStream, Scraped};
use crate::source::DocumentSource;

#[instrument(skip(source))]
pub(crate) async fn get_match<S: DocumentSource>(
    source: &S,
    base_url: &str,
    id: &str,
) -> Result<Scraped<MatchDetail>> {
    let url = format!("{base_url}/matches/{id}/-");
    let body = hltv_scraper::fetch_page(source, &url).await?;
    let mut diagnostics = Diagnostics::default();
    let raw = parse_match_page(&Html::parse_document(&body), base_url, id, &mut diagnostics)?;
    let detail = restructure::match_detail(raw);
    debug!(id, maps = detail.maps.len(), "parsed match detail");
    Ok(diagnostics.finish(detail))
}

pub(crate) fn parse_match_page(
    document: &Html,
    base_url: &str,
    id: &str,
    diagnostics: &mut Diagnostics,
) -> Result<RawMatchPage> {
    let root = document.root_element();

    let event_info_selector = Selector::parse(".timeAndEvent")?;
    let event_info = document.select(&event_info_selector).next();

    let date_selector = Selector::parse(".date")?;
    let (date, unixtime) = event_info
        .map(|info| {
            let date = select_text(&info, &date_selector);
            let unixtime = select_attr(&info, &date_selector, "data-unix").unwrap_or_default();
            (date, unixtime.to_string())
        })
        .unwrap_or_default();

    let event_name_selector = Selector::parse(".text-ellipsis")?;
    let event_link_selector = Selector::parse("a")?;
    let title_selector = Selector::parse(".text")?;
    let (event, title) = match event_info {
        Some(info) => {
            let href = select_attr(&info, &event_link_selector, "href").unwrap_or_default();
            let event = MatchEvent {
                name: select_text(&info, &event_name_selector),
                link: absolute_url(base_url, href),
            };
            let title = info
                .select(&title_selector)
                .next()
                .and_then(|e| diagnostics.cleanup("title", &e.text().collect::<String>()));
            (event, title)
        }
        None => (
            MatchEvent {
                name: String::new(),
                link: absolute_url(base_url, ""),
            },
            None,
        ),
    };

    Ok(RawMatchPage {
        id: id.to_string(),
        teams: parse_teams(&root)?,
        date,
        unixtime,
        event,
        format: parse_format(&root)?,
        maps: parse_maps(&root, diagnostics)?,
        highlights: parse_highlights(&root, diagnostics)?,
        streams: parse_streams(&root, diagnostics)?,
        players: parse_players(&root, diagnostics)?,
        headtohead: parse_head_to_head(&root, diagnostics)?,
        title,
    })
}

fn parse_teams(root: &ElementRef) -> Result<Option<RawPageTeams>> {
    let team_selector = Selector::parse(".teamsBox .team")?;
    let logo_selector = Selector::parse(".logo")?;
    let teams = root.select(&team_selector).collect_vec();
    let [team1, team2, ..] = teams.as_slice() else {
        return Ok(None);
    };

    let name = |team: &ElementRef| {
        select_attr(team, &logo_selector, "title")
            .unwrap_or_default()
            .to_string()
    };
    Ok(Some(RawPageTeams {
        team1: name(team1),
        team1_id: decode_team_id_from_logo(select_attr(team1, &logo_selector, "src")),
        team2: name(team2),
        team2_id: decode_team_id_from_logo(select_attr(team2, &logo_selector, "src")),
    }))
}

/// First non-empty line of the veto box, e.g. `Best of 3 (LAN)`.
fn parse_format(root: &ElementRef) -> Result<String> {
    let selector = Selector::parse(".veto-box")?;
    Ok(root
        .select(&selector)
        .next()
        .map(|e| e.text().collect::<String>())
        .and_then(|text| {
            text.lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_default())
}

/// Pair map names with score lines by position.
fn parse_maps(root: &ElementRef, diagnostics: &mut Diagnostics) -> Result<Vec<MatchMap>> {
    let map_selector = Selector::parse(".map-name-holder")?;
    let image_selector = Selector::parse("img")?;
    let result_selector = Selector::parse(".results")?;

    let names = root
        .select(&map_selector)
        .map(|holder| {
            select_attr(&holder, &image_selector, "src")
                .and_then(decode_map_name)
                .unwrap_or_default()
        })
        .collect_vec();
    let results = root
        .select(&result_selector)
        .map(|e| diagnostics.cleanup("map result", &e.text().collect::<String>()))
        .collect_vec();

    if names.len() != results.len() {
        diagnostics.warn(DecodeWarning::CardinalityMismatch {
            context: "map names and map results",
            left: names.len(),
            right: results.len(),
        });
    }

    let mut results = results.into_iter();
    Ok(names
        .into_iter()
        .map(|map| MatchMap {
            map,
            result: results.next().flatten(),
        })
        .collect())
}

fn parse_highlights(root: &ElementRef, diagnostics: &mut Diagnostics) -> Result<Vec<Highlight>> {
    let selector = Selector::parse(".highlights .highlight")?;
    Ok(root
        .select(&selector)
        .map(|e| Highlight {
            name: diagnostics.cleanup("highlight name", &e.text().collect::<String>()),
            link: e
                .value()
                .attr("data-highlight-embed")
                .unwrap_or_default()
                .to_string(),
        })
        .collect())
}

fn parse_streams(root: &ElementRef, diagnostics: &mut Diagnostics) -> Result<Vec<MatchStream>> {
    let selector = Selector::parse(".streams .stream-box")?;
    let name_selector = Selector::parse(".flagAlign")?;
    Ok(root
        .select(&selector)
        .map(|e| MatchStream {
            name: diagnostics.cleanup("stream name", &select_text(&e, &name_selector)),
            link: e
                .value()
                .attr("data-stream-embed")
                .unwrap_or_default()
                .to_string(),
        })
        .collect())
}

/// Player names of both lineups. Each lineup is read from its own container:
/// the last row of `.player` cells holds the names, the row above the photos.
fn parse_players(root: &ElementRef, diagnostics: &mut Diagnostics) -> Result<[Vec<String>; 2]> {
    let lineup_selector = Selector::parse(".lineups .lineup")?;
    let player_selector = Selector::parse("tr:last-child .player")?;

    let mut lineups = root.select(&lineup_selector).map(|lineup| {
        lineup
            .select(&player_selector)
            .filter_map(|player| {
                let name = player
                    .children()
                    .find_map(ElementRef::wrap)
                    .map(|first| first.text().collect::<String>())
                    .unwrap_or_default();
                diagnostics.cleanup("player", &name)
            })
            .collect_vec()
    });
    let team1 = lineups.next().unwrap_or_default();
    let team2 = lineups.next().unwrap_or_default();

    if team1.len() != team2.len() {
        diagnostics.warn(DecodeWarning::CardinalityMismatch {
            context: "lineup sizes",
            left: team1.len(),
            right: team2.len(),
        });
    }
    Ok([team1, team2])
}

fn parse_head_to_head(
    root: &ElementRef,
    diagnostics: &mut Diagnostics,
) -> Result<Option<HeadToHead>> {
    let box_selector = Selector::parse(".head-to-head")?;
    let Some(head_to_head) = root.select(&box_selector).next() else {
        return Ok(None);
    };

    let number_selector = Selector::parse(".flexbox-center .bold")?;
    let numbers = head_to_head
        .select(&number_selector)
        .map(|e| e.text().collect::<String>())
        .collect_vec();
    let [team1wins, overtimes, team2wins, ..] = numbers.as_slice() else {
        diagnostics.warn(DecodeWarning::CardinalityMismatch {
            context: "head-to-head numbers",
            left: 3,
            right: numbers.len(),
        });
        return Ok(None);
    };

    let mut number = |field, raw: &str| diagnostics.number(field, raw, |s| s.trim().parse().ok());
    let team1wins = number("team1wins", team1wins.as_str());
    let overtimes = number("overtimes", overtimes.as_str());
    let team2wins = number("team2wins", team2wins.as_str());
    Ok(match (team1wins, overtimes, team2wins) {
        (Some(team1wins), Some(overtimes), Some(team2wins)) => Some(HeadToHead {
            team1wins,
            overtimes,
            team2wins,
        }),
        _ => None,
    })
}
