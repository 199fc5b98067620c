use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use crate::decode::decode_team_id_from_logo;
use crate::error::{HltvError, Result};
use crate::hltv_scraper::restructure::{self, RawResultRow};
use crate::hltv_scraper::{self, match_id_from_href, select_attr, select_text, Diagnostics};
use crate::model::{ResultSummary, ResultsOptions, Scraped};
use crate::source::DocumentSource;

pub(crate) const RESULTS_PER_PAGE: u32 = 100;

/// Read `options.pages` result pages one after another and concatenate them
/// in page order.
#[instrument(skip(source))]
pub(crate) async fn list_results<S: DocumentSource>(
    source: &S,
    base_url: &str,
    options: ResultsOptions,
) -> Result<Scraped<Vec<ResultSummary>>> {
    if options.pages < 1 {
        return Err(HltvError::InvalidPageCount {
            pages: options.pages,
        });
    }

    let mut diagnostics = Diagnostics::default();
    let mut results = vec![];
    for page in 0..options.pages {
        let offset = page * RESULTS_PER_PAGE;
        let url = format!("{base_url}/results?offset={offset}");
        let body = hltv_scraper::fetch_page(source, &url).await?;
        let page_results = parse_results(&Html::parse_document(&body), &mut diagnostics)?;
        debug!(count = page_results.len(), offset, "parsed results page");
        results.extend(page_results);
    }
    Ok(diagnostics.finish(results))
}

pub(crate) fn parse_results(
    document: &Html,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<ResultSummary>> {
    let selector = Selector::parse(".result-con")?;
    document
        .select(&selector)
        .map(|element| parse_result(&element, diagnostics).map(restructure::result_summary))
        .collect()
}

fn parse_result(element: &ElementRef, diagnostics: &mut Diagnostics) -> Result<RawResultRow> {
    let link_selector = Selector::parse("a")?;
    let href = select_attr(element, &link_selector, "href").unwrap_or_default();

    let team1_selector = Selector::parse(".team1")?;
    let team2_selector = Selector::parse(".team2")?;
    let team1_logo_selector = Selector::parse(".team1 .team-logo")?;
    let team2_logo_selector = Selector::parse(".team2 .team-logo")?;

    let format_selector = Selector::parse(".map-text")?;
    let score_selector = Selector::parse(".result-score")?;
    let result = diagnostics.cleanup("result", &select_text(element, &score_selector));

    Ok(RawResultRow {
        id: match_id_from_href(href),
        team1: select_text(element, &team1_selector),
        team1_id: decode_team_id_from_logo(select_attr(element, &team1_logo_selector, "src")),
        team2: select_text(element, &team2_selector),
        team2_id: decode_team_id_from_logo(select_attr(element, &team2_logo_selector, "src")),
        format: select_text(element, &format_selector),
        result,
        unixtime: element
            .value()
            .attr("data-zonedgrouping-entry-unix")
            .unwrap_or_default()
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hltv_scraper::testing::FixtureSource;
    use crate::hltv_scraper::BASE_URL;

    fn results_page(rows: &[(&str, &str, &str)]) -> String {
        let rows: String = rows
            .iter()
            .map(|(id, team1, format)| {
                format!(
                    r##"<div class="result-con" data-zonedgrouping-entry-unix="1700000000000">
                         <a href="/matches/{id}/{team1}-vs-other" class="a-reset">
                           <div class="team1"><span class="team">{team1}</span>
                             <img class="team-logo" src="https://static.hltv.org/images/team/logo/11"></div>
                           <span class="result-score"><span>16</span> - <span>14</span></span>
                           <div class="team2"><span class="team">Other</span>
                             <img class="team-logo" src="#"></div>
                           <div class="map-text">{format}</div>
                         </a>
                       </div>"##
                )
            })
            .collect();
        format!("<html><body><div class=\"results-all\">{rows}</div></body></html>")
    }

    #[test]
    fn test_parse_results() {
        let document = Html::parse_document(&results_page(&[("100", "Alpha", "bo3")]));
        let mut diagnostics = Diagnostics::default();
        let results = parse_results(&document, &mut diagnostics).unwrap();

        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert_eq!(result.id, "100");
        assert_eq!(result.team1, "Alpha");
        assert_eq!(result.team1_id, Some(11));
        assert_eq!(result.team2, "Other");
        assert_eq!(result.team2_id, None);
        assert_eq!(result.format, "bo3");
        assert!(result.map.is_none());
        assert_eq!(result.result.as_deref(), Some("16 - 14"));
        assert_eq!(result.unixtime, "1700000000000");
        assert_eq!(
            result.played_at().map(|t| t.timestamp()),
            Some(1_700_000_000)
        );
    }

    #[test]
    fn test_obfuscated_score_is_omitted() {
        let page = results_page(&[("9", "Alpha", "bo3")]).replace(
            "<span>16</span> - <span>14</span>",
            "[email protected]",
        );
        let mut diagnostics = Diagnostics::default();
        let results = parse_results(&Html::parse_document(&page), &mut diagnostics).unwrap();

        assert!(results[0].result.is_none());
        let value = serde_json::to_value(&results[0]).unwrap();
        assert!(value.get("result").is_none());
        assert_eq!(value["format"], "bo3");
        assert_eq!(
            diagnostics.finish(()).warnings,
            vec![crate::DecodeWarning::Obfuscated { field: "result" }]
        );
    }

    #[tokio::test]
    async fn test_list_results_fetches_pages_in_order() {
        let source = FixtureSource::default()
            .with_page(
                &format!("{BASE_URL}/results?offset=0"),
                &results_page(&[("1", "Alpha", "bo3"), ("2", "Beta", "mirage")]),
            )
            .with_page(
                &format!("{BASE_URL}/results?offset=100"),
                &results_page(&[("3", "Gamma", "bo1")]),
            );

        let scraped = list_results(&source, BASE_URL, ResultsOptions { pages: 2 })
            .await
            .unwrap();

        assert_eq!(
            source.requests(),
            vec![
                format!("{BASE_URL}/results?offset=0"),
                format!("{BASE_URL}/results?offset=100"),
            ]
        );
        let ids: Vec<&str> = scraped.data.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(scraped.data[1].format, "Best of 1");
        assert_eq!(scraped.data[1].map.as_deref(), Some("mirage"));
    }

    #[tokio::test]
    async fn test_list_results_rejects_zero_pages() {
        let source = FixtureSource::default();
        let result = list_results(&source, BASE_URL, ResultsOptions { pages: 0 }).await;
        assert!(matches!(result, Err(HltvError::InvalidPageCount { pages: 0 })));
        assert!(source.requests().is_empty());
    }

    #[tokio::test]
    async fn test_list_results_propagates_fetch_error() {
        let source = FixtureSource::default().with_page(
            &format!("{BASE_URL}/results?offset=0"),
            &results_page(&[("1", "Alpha", "bo3")]),
        );
        let result = list_results(&source, BASE_URL, ResultsOptions { pages: 2 }).await;
        assert!(matches!(result, Err(HltvError::UnexpectedStatus { .. })));
        assert_eq!(source.requests().len(), 2);
    }
}
