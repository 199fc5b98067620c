use async_trait::async_trait;

use crate::error::{HltvError, Result};

/// Something that can return the HTML body of a page.
///
/// [`reqwest::Client`] is the production implementation. Other implementations
/// can serve pages from disk, a cache, or memory.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

#[async_trait]
impl DocumentSource for reqwest::Client {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.get(url).send().await.map_err(|e| HltvError::Http {
            url: url.to_owned(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HltvError::UnexpectedStatus {
                url: url.to_owned(),
                status,
            });
        }

        response.text().await.map_err(|e| HltvError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })
    }
}

