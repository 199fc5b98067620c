use tracing::instrument;

use crate::error::Result;
use crate::hltv_scraper;
use crate::model::*;
use crate::source::DocumentSource;

/// The main entry point for interacting with HLTV.org.
///
/// `HltvClient` wraps a [`DocumentSource`] (a [`reqwest::Client`] by default)
/// and exposes methods to fetch the match list, results, streams, match
/// details and active forum threads.
///
/// Every method returns the records together with any [`DecodeWarning`]s
/// raised for fields that could not be decoded.
///
/// [`DecodeWarning`]: crate::DecodeWarning
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> hltv_scraper::Result<()> {
/// use hltv_scraper::{HltvClient, ResultsOptions};
///
/// let client = HltvClient::new();
/// let results = client.list_results(ResultsOptions { pages: 2 }).await?;
/// println!("Found {} results", results.data.len());
/// # Ok(())
/// # }
/// ```
pub struct HltvClient<S = reqwest::Client> {
    source: S,
    base_url: String,
}

impl HltvClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self::with_source(client)
    }
}

impl Default for HltvClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DocumentSource> HltvClient<S> {
    /// Create a client that reads pages from any [`DocumentSource`].
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            base_url: hltv_scraper::BASE_URL.to_string(),
        }
    }

    /// Use a different site root, e.g. a mirror or a local test server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The document source this client reads pages from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the live and upcoming matches, live matches first.
    #[instrument(skip(self))]
    pub async fn list_matches(&self) -> Result<Scraped<MatchList>> {
        hltv_scraper::matches::list_matches(&self.source, &self.base_url).await
    }

    /// Fetch the most recent results, 100 per page, in page order.
    ///
    /// Fails with [`crate::HltvError::InvalidPageCount`] before any request
    /// is made if `options.pages` is 0.
    #[instrument(skip(self))]
    pub async fn list_results(&self, options: ResultsOptions) -> Result<Scraped<Vec<ResultSummary>>> {
        hltv_scraper::results::list_results(&self.source, &self.base_url, options).await
    }

    /// Fetch the streams listed on the front page.
    #[instrument(skip(self))]
    pub async fn list_streams(&self, options: StreamOptions) -> Result<Scraped<Vec<Stream>>> {
        hltv_scraper::streams::list_streams(&self.source, &self.base_url, options).await
    }

    /// Fetch full details for a specific match by ID.
    #[instrument(skip(self))]
    pub async fn get_match(&self, id: &str) -> Result<Scraped<MatchDetail>> {
        hltv_scraper::match_detail::get_match(&self.source, &self.base_url, id).await
    }

    /// Fetch the active forum threads from the front page.
    #[instrument(skip(self))]
    pub async fn list_active_threads(&self) -> Result<Scraped<Vec<Thread>>> {
        hltv_scraper::threads::list_active_threads(&self.source, &self.base_url).await
    }
}
