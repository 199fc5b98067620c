use ::scraper::error::SelectorErrorKind;
use serde::Serialize;

/// All errors that can occur during HLTV scraping operations.
#[derive(thiserror::Error, Debug)]
pub enum HltvError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// The caller asked for fewer than one page of results.
    #[error("pages cannot be less than 1 (got {pages})")]
    InvalidPageCount { pages: u32 },
}

impl<'a> From<SelectorErrorKind<'a>> for HltvError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        HltvError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HltvError>;

/// A non-fatal problem found while decoding a single field.
///
/// The affected field is left out of the record and parsing carries on.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DecodeWarning {
    /// The field was replaced by the site's anti-scraping email placeholder.
    #[error("cannot decode {field}: value is obfuscated")]
    Obfuscated { field: &'static str },

    /// A count or id did not contain a parseable integer.
    #[error("cannot decode {field}: {raw:?} is not a number")]
    MalformedNumber { field: &'static str, raw: String },

    /// Two lists that are paired by position have different lengths.
    #[error("{context}: expected matching counts, got {left} and {right}")]
    CardinalityMismatch {
        context: &'static str,
        left: usize,
        right: usize,
    },
}
