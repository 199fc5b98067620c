use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument, trace};

use crate::decode::{decode_event_id_from_logo, decode_team_id_from_logo};
use crate::error::Result;
use crate::hltv_scraper::restructure::{self, RawMatchKind, RawMatchRow, RawTeams};
use crate::hltv_scraper::{self, match_id_from_href, select_attr, select_text, Diagnostics};
use crate::model::{MatchList, Scraped};
use crate::source::DocumentSource;

const LIVE_DATE: &str = "Today";
const LIVE_UNIXTIME: &str = "Now";
const UNKNOWN_FORMAT: &str = "unknown";

#[instrument(skip(source))]
pub(crate) async fn list_matches<S: DocumentSource>(
    source: &S,
    base_url: &str,
) -> Result<Scraped<MatchList>> {
    let url = format!("{base_url}/matches");
    let body = hltv_scraper::fetch_page(source, &url).await?;
    let mut diagnostics = Diagnostics::default();
    let matches = parse_matches(&Html::parse_document(&body), &mut diagnostics)?;
    debug!(count = matches.len(), "parsed match list");
    Ok(diagnostics.finish(matches))
}

pub(crate) fn parse_matches(document: &Html, diagnostics: &mut Diagnostics) -> Result<MatchList> {
    let live_selector = Selector::parse(".live-match")?;
    let upcoming_selector = Selector::parse(".upcoming-match.standard-box")?;

    let mut matches = vec![];
    for element in document.select(&live_selector) {
        match parse_live_match(&element, diagnostics)? {
            Some(row) => matches.push(restructure::match_summary(row)),
            None => trace!("skipping live match without two team logos"),
        }
    }
    for element in document.select(&upcoming_selector) {
        let row = parse_upcoming_match(&element, diagnostics)?;
        matches.push(restructure::match_summary(row));
    }
    Ok(matches)
}

/// A live row; `None` if fewer than two team logos are present.
fn parse_live_match(
    element: &ElementRef,
    diagnostics: &mut Diagnostics,
) -> Result<Option<RawMatchRow>> {
    let logo_selector = Selector::parse(".logo")?;
    let logos = element.select(&logo_selector).collect_vec();
    let [team1, team2, ..] = logos.as_slice() else {
        return Ok(None);
    };

    let id_selector = Selector::parse(".scores .table")?;
    let id = select_attr(element, &id_selector, "data-livescore-match")
        .unwrap_or_default()
        .to_string();

    let link_selector = Selector::parse("a.a-reset")?;
    let link = select_attr(element, &link_selector, "href")
        .unwrap_or_default()
        .to_string();

    let format_selector = Selector::parse(".bestof")?;
    let format = select_text(element, &format_selector);

    let (event_id, event_name) = parse_event(element, diagnostics)?;
    let teams = RawTeams {
        team1: team1.value().attr("title").unwrap_or_default().to_string(),
        team1_id: decode_team_id_from_logo(team1.value().attr("src")),
        team2: team2.value().attr("title").unwrap_or_default().to_string(),
        team2_id: decode_team_id_from_logo(team2.value().attr("src")),
        event_id,
        event_name,
    };

    Ok(Some(RawMatchRow {
        id,
        link,
        date: LIVE_DATE.to_string(),
        unixtime: LIVE_UNIXTIME.to_string(),
        time: None,
        format,
        kind: RawMatchKind::Live(teams),
    }))
}

fn parse_upcoming_match(element: &ElementRef, diagnostics: &mut Diagnostics) -> Result<RawMatchRow> {
    let link = element.value().attr("href").unwrap_or_default().to_string();
    let id = match_id_from_href(&link);

    let time_selector = Selector::parse("div.time")?;
    let time_element = element.select(&time_selector).next();
    let time = time_element.map(|e| e.text().collect::<String>().trim().to_string());
    let unixtime = time_element
        .and_then(|e| e.value().attr("data-unix"))
        .unwrap_or_default()
        .to_string();

    let headline_selector = Selector::parse(".standard-headline")?;
    let date = element
        .parent()
        .and_then(ElementRef::wrap)
        .map(|group| select_text(&group, &headline_selector))
        .unwrap_or_default();

    let team_selector = Selector::parse(".team")?;
    let teams = element.select(&team_selector).collect_vec();
    let (format, kind) = match teams.as_slice() {
        [team1, team2, ..] => {
            let format_selector = Selector::parse(".map-text")?;
            let logo_selector = Selector::parse(".logo")?;
            let (event_id, event_name) = parse_event(element, diagnostics)?;
            let teams = RawTeams {
                team1: team1.text().collect::<String>().trim().to_string(),
                team1_id: decode_team_id_from_logo(team_logo(team1, &logo_selector)),
                team2: team2.text().collect::<String>().trim().to_string(),
                team2_id: decode_team_id_from_logo(team_logo(team2, &logo_selector)),
                event_id,
                event_name,
            };
            (
                select_text(element, &format_selector),
                RawMatchKind::Upcoming(teams),
            )
        }
        _ => {
            let label_selector = Selector::parse(".placeholder-text-cell")?;
            let label = element
                .select(&label_selector)
                .next()
                .and_then(|e| diagnostics.cleanup("label", &e.text().collect::<String>()));
            (UNKNOWN_FORMAT.to_string(), RawMatchKind::Placeholder { label })
        }
    };

    Ok(RawMatchRow {
        id,
        link,
        date,
        unixtime,
        time,
        format,
        kind,
    })
}

/// Logo next to a team name, inside the team's own container.
fn team_logo<'a>(team: &ElementRef<'a>, logo_selector: &Selector) -> Option<&'a str> {
    team.parent()
        .and_then(ElementRef::wrap)
        .and_then(|container| select_attr(&container, logo_selector, "src"))
}

/// Event id and name from the row's event logo.
fn parse_event(
    element: &ElementRef,
    diagnostics: &mut Diagnostics,
) -> Result<(Option<u32>, Option<String>)> {
    let event_selector = Selector::parse(".event-logo")?;
    let event = element.select(&event_selector).next();
    let event_id = decode_event_id_from_logo(event.and_then(|e| e.value().attr("src")));
    let event_name = event
        .and_then(|e| e.value().attr("title"))
        .and_then(|title| diagnostics.cleanup("eventName", title));
    Ok((event_id, event_name))
}
