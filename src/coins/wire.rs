use std::collections::HashMap;

use serde::Deserialize;

/// One row of `GET /coins/markets`.
#[derive(Deserialize)]
pub(crate) struct RawMarketCoin {
    pub(crate) id: Option<String>,
    pub(crate) symbol: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) current_price: Option<f64>,
    pub(crate) market_cap: Option<f64>,
    pub(crate) market_cap_rank: Option<u32>,
    pub(crate) high_24h: Option<f64>,
    pub(crate) low_24h: Option<f64>,
    pub(crate) price_change_percentage_24h: Option<f64>,
    pub(crate) ath: Option<f64>,
}

/// Prices keyed by quote currency (`usd`, `eur`, ...). Values can be null for
/// thinly traded pairs.
pub(crate) type CurrencyMap = HashMap<String, Option<f64>>;

/// Body of `GET /coins/{id}` with localization, tickers, community and developer
/// blocks disabled.
#[derive(Deserialize)]
pub(crate) struct RawCoinDetail {
    pub(crate) id: Option<String>,
    pub(crate) symbol: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) market_cap_rank: Option<u32>,
    pub(crate) description: Option<HashMap<String, Option<String>>>,
    pub(crate) links: Option<RawLinks>,
    pub(crate) market_data: Option<RawMarketData>,
    pub(crate) last_updated: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct RawLinks {
    #[serde(default)]
    pub(crate) homepage: Vec<Option<String>>,
}

#[derive(Deserialize)]
pub(crate) struct RawMarketData {
    pub(crate) current_price: Option<CurrencyMap>,
    pub(crate) market_cap: Option<CurrencyMap>,
    pub(crate) high_24h: Option<CurrencyMap>,
    pub(crate) low_24h: Option<CurrencyMap>,
    pub(crate) ath: Option<CurrencyMap>,
    pub(crate) price_change_percentage_24h: Option<f64>,
}

/// CoinGecko error body, e.g. `{"error":"coin not found"}`.
#[derive(Deserialize)]
pub(crate) struct RawErrorBody {
    pub(crate) error: Option<String>,
}
