//! Command-line interface argument parsing.

use std::time::Duration;

use clap::{Parser, Subcommand};
use crypto_news::{ExecutionMode, TrackerConfig, TrackerError, coins, news};
use tracing::Level;

/// crypto-news - latest crypto headlines and market prices
///
/// Examples:
///   crypto-news search "bitcoin ETF"
///   crypto-news coins --limit 5
///   crypto-news coin ethereum
///   crypto-news serve --port 8080
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// NewsAPI key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true, global = true)]
    pub news_api_key: Option<String>,

    /// Execution mode; only `production` sends the NewsAPI key
    #[arg(long, env = "APP_ENV", default_value = "development", global = true)]
    pub mode: String,

    /// Per-request timeout in seconds (0 disables it)
    #[arg(long, value_name = "SECS", default_value = "10", global = true)]
    pub timeout_secs: u64,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search news for a keyword and print the latest titles
    Search {
        /// Words to search for (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        keyword: Vec<String>,
    },

    /// Print top headlines for a country
    Headlines {
        #[arg(long, default_value = news::DEFAULT_COUNTRY)]
        country: String,
    },

    /// List the largest coins by market cap
    Coins {
        #[arg(short, long, default_value_t = coins::DEFAULT_LIMIT)]
        limit: u32,
    },

    /// Show details for one coin
    Coin {
        /// CoinGecko identifier, e.g. `bitcoin`, `ethereum`, `solana`
        #[arg(default_value = coins::DEFAULT_COIN_ID)]
        id: String,
    },

    /// Fetch top coins and latest news together
    Dashboard,

    /// Serve the dashboard and search pages over HTTP
    Serve {
        #[arg(short, long, env = "PORT", default_value_t = 3000)]
        port: u16,

        #[arg(long, env = "HOST", default_value = "127.0.0.1")]
        host: String,
    },
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn log_level(&self) -> Level {
        if self.verbose { Level::DEBUG } else { Level::INFO }
    }

    /// Build the immutable client configuration from flags and environment.
    pub fn tracker_config(&self) -> TrackerConfig {
        let timeout = (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs));
        TrackerConfig::new(self.news_api_key.clone(), ExecutionMode::from(self.mode.as_str()))
            .with_timeout(timeout)
    }

    /// Configuration for the keyword lookup.
    ///
    /// The lookup always talks to NewsAPI with the key, whatever the mode, so a
    /// real key is required and the mode is forced to `Production`.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` when no real key is configured.
    pub fn search_config(&self) -> Result<TrackerConfig, TrackerError> {
        let config = self.tracker_config();
        config.require_news_api_key()?;
        Ok(config.with_mode(ExecutionMode::Production))
    }
}
