use clap::Parser;
use gamecatalog::config::cli::{Args, Command};
use gamecatalog::config::Config;
use gamecatalog::error::{GameError, Result};
use gamecatalog::http;
use gamecatalog::infrastructure::{parse_page, HttpFetcher, UrlBuilder};
use gamecatalog::services::CatalogService;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let config = Config::from_args(args)?;
    let urls = UrlBuilder::new(&config.args.base_url)?;
    let fetcher = Arc::new(HttpFetcher::new(config.http_client.clone()));
    let catalog = Arc::new(CatalogService::new(fetcher, urls)?);

    match config.args.command.clone().unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, catalog).await?,
        Command::List { page } => {
            print_json(&catalog.list_games(parse_page(page.as_deref())).await?)?
        }
        Command::Search { query, page } => print_json(
            &catalog
                .search_games(&query, parse_page(page.as_deref()))
                .await?,
        )?,
        Command::Detail { slug } => print_json(&catalog.game_detail(&slug).await?)?,
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .map_err(|e| GameError::Other(format!("invalid log level {log_level:?}: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| GameError::Other(format!("initialize tracing subscriber: {e}")))
}

async fn serve(config: &Config, catalog: Arc<CatalogService>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.args.listen).await?;
    info!("Server is running on http://{}", listener.local_addr()?);

    axum::serve(listener, http::routes(catalog)).await?;
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
