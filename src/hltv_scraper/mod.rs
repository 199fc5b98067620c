pub(crate) mod match_detail;
pub(crate) mod matches;
pub(crate) mod restructure;
pub(crate) mod results;
pub(crate) mod streams;
pub(crate) mod threads;

use ::scraper::{ElementRef, Selector};
use tracing::{debug, warn};

use crate::decode::cleanup_string;
use crate::error::{DecodeWarning, Result};
use crate::model::Scraped;
use crate::source::DocumentSource;

pub(crate) const BASE_URL: &str = "https://www.hltv.org";

/// Fetch the raw HTML of a page.
///
/// Callers parse the body with `Html::parse_document` inside a synchronous
/// function, so the tree never lives across an await point.
pub(crate) async fn fetch_page<S: DocumentSource>(source: &S, url: &str) -> Result<String> {
    debug!(url, "fetching page");
    source.fetch(url).await
}

/// Collects decode warnings raised while parsing one operation's pages.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    warnings: Vec<DecodeWarning>,
}

impl Diagnostics {
    pub(crate) fn warn(&mut self, warning: DecodeWarning) {
        warn!(%warning, "decode warning");
        self.warnings.push(warning);
    }

    /// [`cleanup_string`] that records a warning when the text was obfuscated.
    pub(crate) fn cleanup(&mut self, field: &'static str, raw: &str) -> Option<String> {
        let cleaned = cleanup_string(raw);
        if cleaned.is_none() {
            self.warn(DecodeWarning::Obfuscated { field });
        }
        cleaned
    }

    /// Decode a number, recording a warning when the text is not one.
    pub(crate) fn number(
        &mut self,
        field: &'static str,
        raw: &str,
        decode: impl FnOnce(&str) -> Option<u32>,
    ) -> Option<u32> {
        let value = decode(raw);
        if value.is_none() {
            self.warn(DecodeWarning::MalformedNumber {
                field,
                raw: raw.to_string(),
            });
        }
        value
    }

    pub(crate) fn finish<T>(self, data: T) -> Scraped<T> {
        Scraped {
            data,
            warnings: self.warnings,
        }
    }
}

/// Full text content of the first element matching `selector` inside
/// `element`, trimmed. Returns an empty string if nothing matches.
pub(crate) fn select_text(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .map(|e| e.text().collect::<String>())
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Attribute of the first element matching `selector` inside `element`.
pub(crate) fn select_attr<'a>(
    element: &ElementRef<'a>,
    selector: &Selector,
    name: &str,
) -> Option<&'a str> {
    element
        .select(selector)
        .next()
        .and_then(|e| e.value().attr(name))
}

/// Text of the element itself, with the text of all child elements left out.
pub(crate) fn own_text(element: &ElementRef) -> String {
    element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
        .collect()
}

/// Make a site-relative href absolute.
pub(crate) fn absolute_url(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if href.starts_with("//") {
        format!("https:{href}")
    } else {
        format!("{base_url}{href}")
    }
}

/// Match id from a link of the form `/matches/<id>/<slug>`.
pub(crate) fn match_id_from_href(href: &str) -> String {
    let rest = href.strip_prefix("/matches/").unwrap_or(href);
    rest.split('/').next().unwrap_or_default().to_string()
}
