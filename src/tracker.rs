use crate::{
    coins::{self, Coin, CoinDetail, CoinDetailBuilder, MarketsBuilder},
    core::{TrackerClient, TrackerError},
    dashboard::{Dashboard, DashboardBuilder},
    news::{self, Article, HeadlinesBuilder, NewsBuilder},
};

/// A high-level interface over both upstreams.
///
/// This is the entry point for callers that only need the common operations with
/// their usual defaults. Each method is a thin wrapper around the matching builder
/// ([`NewsBuilder`], [`MarketsBuilder`], [`CoinDetailBuilder`], [`DashboardBuilder`]),
/// which remain available for finer control.
///
/// # Example
///
/// ```no_run
/// # use crypto_news::{ExecutionMode, Tracker, TrackerClient, TrackerConfig};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = TrackerConfig::new(std::env::var("NEWS_API_KEY").ok(), ExecutionMode::Production);
/// let client = TrackerClient::new(config)?;
/// let tracker = Tracker::new(&client);
///
/// let board = tracker.dashboard().await;
/// for coin in &board.coins {
///     println!("{} ${}", coin.name, coin.current_price);
/// }
/// for failure in &board.failures {
///     eprintln!("{} unavailable: {}", failure.source, failure.message);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Tracker {
    client: TrackerClient,
}

impl Tracker {
    pub fn new(client: &TrackerClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    pub fn client(&self) -> &TrackerClient {
        &self.client
    }

    /* ---------------- News ---------------- */

    /// Searches news for `query`, newest first, at most `limit` articles.
    ///
    /// # Errors
    ///
    /// See [`NewsBuilder::fetch`].
    pub async fn news(&self, query: &str, limit: u32) -> Result<Vec<Article>, TrackerError> {
        NewsBuilder::new(&self.client, query).limit(limit).fetch().await
    }

    /// Searches news with the default crypto query and limit.
    ///
    /// # Errors
    ///
    /// See [`NewsBuilder::fetch`].
    pub async fn latest_news(&self) -> Result<Vec<Article>, TrackerError> {
        self.news(news::DEFAULT_QUERY, news::DEFAULT_LIMIT).await
    }

    /// Top headlines for a two-letter country code.
    ///
    /// # Errors
    ///
    /// See [`HeadlinesBuilder::fetch`].
    pub async fn headlines(&self, country: &str, limit: u32) -> Result<Vec<Article>, TrackerError> {
        HeadlinesBuilder::new(&self.client)
            .country(country)
            .limit(limit)
            .fetch()
            .await
    }

    /* ---------------- Market data ---------------- */

    /// The `limit` largest coins by market cap.
    ///
    /// # Errors
    ///
    /// See [`MarketsBuilder::fetch`].
    pub async fn top_coins(&self, limit: u32) -> Result<Vec<Coin>, TrackerError> {
        MarketsBuilder::new(&self.client).limit(limit).fetch().await
    }

    /// The detailed record for `coin_id`.
    ///
    /// # Errors
    ///
    /// See [`CoinDetailBuilder::fetch`].
    pub async fn coin_details(&self, coin_id: &str) -> Result<CoinDetail, TrackerError> {
        CoinDetailBuilder::new(&self.client, coin_id).fetch().await
    }

    /// The detailed record for the default coin (`bitcoin`).
    ///
    /// # Errors
    ///
    /// See [`CoinDetailBuilder::fetch`].
    pub async fn default_coin_details(&self) -> Result<CoinDetail, TrackerError> {
        self.coin_details(coins::DEFAULT_COIN_ID).await
    }

    /* ---------------- Aggregate ---------------- */

    /// Top coins and latest news, fetched concurrently with partial-failure tolerance.
    pub async fn dashboard(&self) -> Dashboard {
        DashboardBuilder::new(&self.client).fetch().await
    }
}
