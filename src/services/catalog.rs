use crate::domain::{DetailResponse, ErrorRecord, GameDetail, GameSummary};
use crate::error::Result;
use crate::infrastructure::{DetailScraper, ListingScraper, PageFetcher, UrlBuilder};
use std::sync::Arc;
use tokio::task::JoinError;
use tracing::{error, info, warn};

/// Ties URL building, fetching and extraction together for one request.
pub struct CatalogService {
    fetcher: Arc<dyn PageFetcher>,
    urls: UrlBuilder,
    listing: Arc<ListingScraper>,
    detail: Arc<DetailScraper>,
}

impl CatalogService {
    pub fn new(fetcher: Arc<dyn PageFetcher>, urls: UrlBuilder) -> Result<Self> {
        let listing = ListingScraper::new(urls.codec().clone())?;
        let detail = DetailScraper::new()?;

        info!("Created new Catalog service for {}", urls.codec().base());
        Ok(Self {
            fetcher,
            urls,
            listing: Arc::new(listing),
            detail: Arc::new(detail),
        })
    }

    pub async fn list_games(&self, page: u32) -> Result<Vec<GameSummary>> {
        let url = self.urls.listing_url(page);
        let games = self.scrape_list(&url).await?;
        info!("Total games found: {}", games.len());
        Ok(games)
    }

    pub async fn search_games(&self, query: &str, page: u32) -> Result<Vec<GameSummary>> {
        let url = self.urls.search_url(query, page);
        let games = self.scrape_list(&url).await?;
        info!("Total search results for {query:?}: {}", games.len());
        Ok(games)
    }

    /// A failed fetch turns into an [`ErrorRecord`] rather than a blank
    /// detail, since an empty page and a missing page would otherwise look
    /// the same.
    pub async fn game_detail(&self, slug: &str) -> Result<DetailResponse> {
        let url = self.urls.detail_url(slug);

        let html = match self.fetcher.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                error!("Error fetching game details for {slug}: {e}");
                return Ok(ErrorRecord::detail_fetch_failed().into());
            }
        };

        let detail = Arc::clone(&self.detail);
        let parsed = tokio::task::spawn_blocking(move || detail.extract_detail(&html)).await;
        Ok(detail_or_error(slug, parsed))
    }

    // Fetch and parse failures are swallowed into an empty list, so callers
    // cannot tell "no results" from "source unreachable".
    async fn scrape_list(&self, url: &str) -> Result<Vec<GameSummary>> {
        let html = match self.fetcher.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Error fetching {url}: {e}");
                return Ok(Vec::new());
            }
        };

        let listing = Arc::clone(&self.listing);
        let parsed = tokio::task::spawn_blocking(move || listing.extract_list(&html)).await;
        Ok(list_or_empty(url, parsed))
    }
}

fn list_or_empty(
    url: &str,
    parsed: std::result::Result<Vec<GameSummary>, JoinError>,
) -> Vec<GameSummary> {
    parsed.unwrap_or_else(|e| {
        warn!("Error parsing {url}: {e}");
        Vec::new()
    })
}

fn detail_or_error(
    slug: &str,
    parsed: std::result::Result<GameDetail, JoinError>,
) -> DetailResponse {
    match parsed {
        Ok(game) => game.into(),
        Err(e) => {
            error!("Error parsing game details for {slug}: {e}");
            ErrorRecord::detail_fetch_failed().into()
        }
    }
}
