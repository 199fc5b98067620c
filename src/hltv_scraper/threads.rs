use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use crate::decode::decode_count;
use crate::error::Result;
use crate::hltv_scraper::{self, own_text, Diagnostics};
use crate::model::{Scraped, Thread};
use crate::source::DocumentSource;

#[instrument(skip(source))]
pub(crate) async fn list_active_threads<S: DocumentSource>(
    source: &S,
    base_url: &str,
) -> Result<Scraped<Vec<Thread>>> {
    let body = hltv_scraper::fetch_page(source, base_url).await?;
    let mut diagnostics = Diagnostics::default();
    let threads = parse_threads(&Html::parse_document(&body), &mut diagnostics)?;
    debug!(count = threads.len(), "parsed active threads");
    Ok(diagnostics.finish(threads))
}

pub(crate) fn parse_threads(document: &Html, diagnostics: &mut Diagnostics) -> Result<Vec<Thread>> {
    let selector = Selector::parse(".activitylist > *")?;
    document
        .select(&selector)
        .map(|element| parse_thread(&element, diagnostics))
        .collect()
}

fn parse_thread(element: &ElementRef, diagnostics: &mut Diagnostics) -> Result<Thread> {
    let title_selector = Selector::parse("span")?;
    Ok(Thread {
        title: element
            .select(&title_selector)
            .flat_map(|span| span.text())
            .collect::<String>()
            .trim()
            .to_string(),
        link: element.value().attr("href").unwrap_or_default().to_string(),
        replies: diagnostics.number("replies", &own_text(element), decode_count),
    })
}
