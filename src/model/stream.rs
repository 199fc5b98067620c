use serde::Serialize;

/// Options for [`crate::HltvClient::list_streams`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamOptions {
    /// Fetch each stream's page to find the embedded player URL.
    pub resolve_links: bool,
}

/// A stream listed on the front page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub hltv_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_link: Option<String>,
}
