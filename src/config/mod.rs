use crate::config::cli::Args;
use crate::error::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub mod cli;

pub struct Config {
    pub args: Args,
    pub http_client: Client,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .user_agent(args.user_agent.as_str())
            .build()?;

        info!(
            "Fetching from {} with a {}s timeout",
            args.base_url, args.timeout_secs
        );

        Ok(Self { args, http_client })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn builds_client_from_parsed_args() {
        let args = Args::try_parse_from(["gamecatalog", "--timeout-secs", "5"]).unwrap();
        let config = Config::from_args(args).unwrap();

        assert_eq!(config.args.timeout_secs, 5);
        assert_eq!(config.args.base_url, "https://game3rb.com/");
    }
}
