use serde::{Deserialize, Serialize};

pub const NO_DOWNLOAD_LINK: &str = "No download link found";
pub const NO_GENERAL_NOTE: &str = "No general note found";
pub const DETAIL_FETCH_FAILED: &str = "Failed to fetch game details";

/// One article on a listing or search-results page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

/// Everything a detail page offers. Missing fields hold their fallback value
/// so the record keeps the same shape on every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetail {
    pub title: String,
    pub image: String,
    pub release_date: String,
    pub developer: String,
    pub publisher: String,
    pub genre: String,
    pub reviews: String,
    pub description: String,
    pub general_note: String,
    pub system_requirements: Vec<String>,
    pub how_to_install: String,
    pub how_to_play_online: String,
    pub screenshots: Vec<String>,
    pub trailer: String,
    pub download_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub error: String,
}

impl ErrorRecord {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn detail_fetch_failed() -> Self {
        Self::new(DETAIL_FETCH_FAILED)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailResponse {
    Error(ErrorRecord),
    Detail(Box<GameDetail>),
}

impl DetailResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, DetailResponse::Error(_))
    }
}

impl From<GameDetail> for DetailResponse {
    fn from(detail: GameDetail) -> Self {
        DetailResponse::Detail(Box::new(detail))
    }
}

impl From<ErrorRecord> for DetailResponse {
    fn from(record: ErrorRecord) -> Self {
        DetailResponse::Error(record)
    }
}
