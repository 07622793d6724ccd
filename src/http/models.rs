use serde::Deserialize;

// Every parameter is taken as a raw string so a malformed `page` falls back
// to the first page instead of being rejected by the extractor.

#[derive(Debug, Default, Deserialize)]
pub struct GamesQuery {
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SlugQuery {
    pub slug: Option<String>,
}

/// Treats an empty value the same as a missing one.
pub fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
