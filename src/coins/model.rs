use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// One coin from the market listing, priced in USD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coin {
    /// Upstream identifier used for detail lookups (e.g. `bitcoin`).
    pub id: String,
    pub name: String,
    /// Ticker symbol as returned upstream (lowercase, e.g. `btc`).
    pub symbol: String,
    pub current_price: Decimal,
    pub price_change_percentage_24h: Option<Decimal>,
    pub market_cap: Option<Decimal>,
    pub market_cap_rank: Option<u32>,
    pub high_24h: Option<Decimal>,
    pub low_24h: Option<Decimal>,
    /// All-time high.
    pub ath: Option<Decimal>,
}

/// The detailed record for one coin. Money fields are in USD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoinDetail {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub current_price_usd: Option<Decimal>,
    pub market_cap_usd: Option<Decimal>,
    pub high_24h_usd: Option<Decimal>,
    pub low_24h_usd: Option<Decimal>,
    pub ath_usd: Option<Decimal>,
    pub price_change_percentage_24h: Option<Decimal>,
    /// First non-empty homepage link.
    pub homepage: Option<String>,
    /// English description, as upstream HTML.
    pub description: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}
