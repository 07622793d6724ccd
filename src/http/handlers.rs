use super::models::{required, GamesQuery, SearchQuery, SlugQuery};
use super::ApiError;
use crate::domain::{DetailResponse, GameSummary};
use crate::infrastructure::parse_page;
use crate::services::CatalogService;
use axum::extract::{Query, State};
use axum::response::Json;
use std::sync::Arc;
use tracing::{error, instrument};

const FETCH_DATA_FAILED: &str = "Failed to fetch data";
const FETCH_SEARCH_FAILED: &str = "Failed to fetch search results";
const FETCH_DETAILS_FAILED: &str = "Failed to fetch game details";

/// GET /games
#[instrument(level = "debug", skip(catalog))]
pub async fn get_games(
    State(catalog): State<Arc<CatalogService>>,
    Query(query): Query<GamesQuery>,
) -> Result<Json<Vec<GameSummary>>, ApiError> {
    let page = parse_page(query.page.as_deref());

    match catalog.list_games(page).await {
        Ok(games) => Ok(Json(games)),
        Err(e) => {
            error!("Listing page {page} failed: {e}");
            Err(ApiError::internal(FETCH_DATA_FAILED))
        }
    }
}

/// GET /search
#[instrument(level = "debug", skip(catalog))]
pub async fn get_search(
    State(catalog): State<Arc<CatalogService>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<GameSummary>>, ApiError> {
    let Some(q) = required(query.q) else {
        return Err(ApiError::bad_request("Query parameter is required"));
    };
    let page = parse_page(query.page.as_deref());

    match catalog.search_games(&q, page).await {
        Ok(games) => Ok(Json(games)),
        Err(e) => {
            error!("Search for {q:?} failed: {e}");
            Err(ApiError::internal(FETCH_SEARCH_FAILED))
        }
    }
}

/// GET /game and GET /download
#[instrument(level = "debug", skip(catalog))]
pub async fn get_game(
    State(catalog): State<Arc<CatalogService>>,
    Query(query): Query<SlugQuery>,
) -> Result<Json<DetailResponse>, ApiError> {
    let Some(slug) = required(query.slug) else {
        return Err(ApiError::bad_request("Game slug is required"));
    };

    match catalog.game_detail(&slug).await {
        Ok(detail) => Ok(Json(detail)),
        Err(e) => {
            error!("Detail for {slug} failed: {e}");
            Err(ApiError::internal(FETCH_DETAILS_FAILED))
        }
    }
}
