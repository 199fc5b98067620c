use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use crate::decode::decode_count;
use crate::error::Result;
use crate::hltv_scraper::{self, absolute_url, own_text, Diagnostics};
use crate::model::{Scraped, Stream, StreamOptions};
use crate::source::DocumentSource;

/// List the front page streams. With `resolve_links`, each stream page is
/// fetched in turn to find its embedded player.
#[instrument(skip(source))]
pub(crate) async fn list_streams<S: DocumentSource>(
    source: &S,
    base_url: &str,
    options: StreamOptions,
) -> Result<Scraped<Vec<Stream>>> {
    let body = hltv_scraper::fetch_page(source, base_url).await?;
    let mut diagnostics = Diagnostics::default();
    let mut streams = parse_streams(&Html::parse_document(&body), base_url, &mut diagnostics)?;
    debug!(count = streams.len(), "parsed stream list");

    if options.resolve_links {
        for stream in &mut streams {
            let page = hltv_scraper::fetch_page(source, &stream.hltv_link).await?;
            stream.real_link = parse_embed_link(&Html::parse_document(&page), base_url)?;
        }
    }
    Ok(diagnostics.finish(streams))
}

pub(crate) fn parse_streams(
    document: &Html,
    base_url: &str,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<Stream>> {
    let selector = Selector::parse("a.col-box.streamer.a-reset")?;
    document
        .select(&selector)
        .map(|element| parse_stream(&element, base_url, diagnostics))
        .collect()
}

fn parse_stream(
    element: &ElementRef,
    base_url: &str,
    diagnostics: &mut Diagnostics,
) -> Result<Stream> {
    let image_selector = Selector::parse("img")?;
    let images = element.select(&image_selector).collect_vec();
    let image_title = |index: usize| {
        images
            .get(index)
            .and_then(|img| img.value().attr("title"))
            .map(str::to_string)
    };

    Ok(Stream {
        name: element.value().attr("title").unwrap_or_default().to_string(),
        viewers: diagnostics.number("viewers", &own_text(element), decode_count),
        category: image_title(0),
        country: image_title(1),
        hltv_link: absolute_url(base_url, element.value().attr("href").unwrap_or_default()),
        real_link: None,
    })
}

/// Absolute player URL from the first `iframe` of a stream page.
fn parse_embed_link(document: &Html, base_url: &str) -> Result<Option<String>> {
    let selector = Selector::parse("iframe")?;
    Ok(document
        .select(&selector)
        .next()
        .and_then(|e| e.value().attr("src"))
        .map(|src| absolute_url(base_url, src)))
}
