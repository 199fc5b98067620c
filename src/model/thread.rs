use serde::Serialize;

/// An active forum thread from the front page activity list.
#[derive(Debug, Clone, Serialize)]
pub struct Thread {
    pub title: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies: Option<u32>,
}
