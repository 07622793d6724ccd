use clap::{Parser, Subcommand};
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Address the HTTP server listens on
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:3000")]
    pub listen: SocketAddr,

    /// Base URL of the catalog site
    #[arg(long, env = "SOURCE_BASE_URL", default_value = crate::domain::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Timeout for a single page fetch, in seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// User agent sent with every page fetch
    #[arg(
        long,
        env = "FETCH_USER_AGENT",
        default_value = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
    )]
    pub user_agent: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the JSON API (default)
    Serve,
    /// Print one listing page as JSON
    List {
        #[arg(long)]
        page: Option<String>,
    },
    /// Print search results as JSON
    Search {
        query: String,
        #[arg(long)]
        page: Option<String>,
    },
    /// Print the detail record for a slug as JSON
    Detail { slug: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serving() {
        let args = Args::try_parse_from(["gamecatalog"]).unwrap();

        assert_eq!(args.command, None);
        assert_eq!(args.listen.port(), 3000);
        assert_eq!(args.base_url, "https://game3rb.com/");
        assert_eq!(args.timeout_secs, 30);
    }

    #[test]
    fn parses_search_subcommand() {
        let args = Args::try_parse_from([
            "gamecatalog",
            "--base-url",
            "http://127.0.0.1:9000/",
            "search",
            "dead cells",
            "--page",
            "2",
        ])
        .unwrap();

        assert_eq!(args.base_url, "http://127.0.0.1:9000/");
        assert_eq!(
            args.command,
            Some(Command::Search {
                query: "dead cells".to_string(),
                page: Some("2".to_string()),
            })
        );
    }
}
