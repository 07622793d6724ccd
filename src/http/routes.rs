use super::handlers;
use crate::services::CatalogService;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Returns a Router with all available routes.
pub fn routes(catalog: Arc<CatalogService>) -> Router {
    Router::new()
        .route("/games", get(handlers::get_games))
        .route("/search", get(handlers::get_search))
        .route("/game", get(handlers::get_game))
        .route("/download", get(handlers::get_game))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}
