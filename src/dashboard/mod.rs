//! Landing-page aggregation: top coins and latest news fetched side by side.

use serde::Serialize;

use crate::{
    TrackerClient,
    coins::{Coin, MarketsBuilder},
    core::fanout::{SourceFailure, settle_both},
    news::{Article, NewsBuilder},
};

/// Source label used in [`SourceFailure`] records for the market listing.
pub const COINS_SOURCE: &str = "coins";
/// Source label used in [`SourceFailure`] records for the news search.
pub const NEWS_SOURCE: &str = "news";

/// Coins shown on the dashboard by default.
pub const DEFAULT_COIN_LIMIT: u32 = 5;
/// News query shown on the dashboard by default.
pub const DEFAULT_NEWS_QUERY: &str = "bitcoin OR ethereum";
/// Articles shown on the dashboard by default.
pub const DEFAULT_NEWS_LIMIT: u32 = 5;

/// Combined coins + news view. A failed source leaves its list empty and adds a
/// [`SourceFailure`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub coins: Vec<Coin>,
    pub news: Vec<Article>,
    pub failures: Vec<SourceFailure>,
}

impl Dashboard {
    /// `true` when every source answered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// The failure recorded for `source`, if it failed.
    #[must_use]
    pub fn failure(&self, source: &str) -> Option<&SourceFailure> {
        self.failures.iter().find(|f| f.source == source)
    }
}

/// A builder for the dashboard fan-out.
#[derive(Debug, Clone)]
pub struct DashboardBuilder {
    client: TrackerClient,
    coin_limit: u32,
    news_query: String,
    news_limit: u32,
}

impl DashboardBuilder {
    pub fn new(client: &TrackerClient) -> Self {
        Self {
            client: client.clone(),
            coin_limit: DEFAULT_COIN_LIMIT,
            news_query: DEFAULT_NEWS_QUERY.to_string(),
            news_limit: DEFAULT_NEWS_LIMIT,
        }
    }

    #[must_use]
    pub const fn coin_limit(mut self, n: u32) -> Self {
        self.coin_limit = n;
        self
    }

    #[must_use]
    pub fn news_query(mut self, query: impl Into<String>) -> Self {
        self.news_query = query.into();
        self
    }

    #[must_use]
    pub const fn news_limit(mut self, n: u32) -> Self {
        self.news_limit = n;
        self
    }

    /// Fetches coins and news concurrently.
    ///
    /// Both requests are in flight before either is awaited, so latency is that of
    /// the slower one. Neither outcome affects the other: a failed source yields an
    /// empty list plus an entry in [`Dashboard::failures`]. This never returns an error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            skip(self),
            fields(coin_limit = self.coin_limit, news_limit = self.news_limit)
        )
    )]
    pub async fn fetch(self) -> Dashboard {
        let coins = MarketsBuilder::new(&self.client)
            .limit(self.coin_limit)
            .fetch();
        let news = NewsBuilder::new(&self.client, self.news_query)
            .limit(self.news_limit)
            .fetch();

        let (coins, news) = settle_both(coins, news).await;

        let mut failures = Vec::new();
        let coins = coins.or_degrade(COINS_SOURCE, &mut failures);
        let news = news.or_degrade(NEWS_SOURCE, &mut failures);

        Dashboard {
            coins,
            news,
            failures,
        }
    }
}
