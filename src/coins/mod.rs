mod api;
mod model;
mod wire;

pub use model::{Coin, CoinDetail};

use crate::{TrackerClient, TrackerError};

/// Number of coins listed when the caller does not name a limit.
pub const DEFAULT_LIMIT: u32 = 10;
/// Coin looked up when the caller does not name one.
pub const DEFAULT_COIN_ID: &str = "bitcoin";

/// A builder for the market listing, largest market cap first, priced in USD.
#[derive(Debug, Clone)]
pub struct MarketsBuilder {
    client: TrackerClient,
    limit: u32,
}

impl MarketsBuilder {
    pub fn new(client: &TrackerClient) -> Self {
        Self {
            client: client.clone(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the number of coins to return (sent upstream as `per_page`).
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Fetches the first page of the listing.
    ///
    /// Ordering is the upstream `market_cap_desc` ordering; the result holds at most `limit` coins.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParams` for an out-of-range limit, or an upstream error if the
    /// request fails, the status is not 2xx, or a row fails validation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(limit = self.limit))
    )]
    pub async fn fetch(self) -> Result<Vec<Coin>, TrackerError> {
        let limit = api::check_per_page(self.limit)?;
        api::fetch_markets(&self.client, limit).await
    }
}

/// A builder for the detailed record of one coin.
#[derive(Debug, Clone)]
pub struct CoinDetailBuilder {
    client: TrackerClient,
    coin_id: String,
}

impl CoinDetailBuilder {
    /// Creates a builder for the given upstream identifier (e.g. `ethereum`).
    pub fn new(client: &TrackerClient, coin_id: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            coin_id: coin_id.into(),
        }
    }

    /// Fetches the record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParams` for a blank id. An id unknown upstream surfaces as
    /// `NotFound`; other failures as the matching upstream error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(coin_id = %self.coin_id))
    )]
    pub async fn fetch(self) -> Result<CoinDetail, TrackerError> {
        let id = self.coin_id.trim();
        if id.is_empty() {
            return Err(TrackerError::InvalidParams("coin id must not be empty".into()));
        }
        api::fetch_detail(&self.client, id).await
    }
}
