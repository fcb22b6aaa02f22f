//! Centralized constants for default endpoints and UA.

/// Identifies the client to upstreams; CoinGecko rejects requests without a UA.
pub(crate) const USER_AGENT: &str = concat!("crypto-news-rs/", env!("CARGO_PKG_VERSION"));

/// NewsAPI v2 base (`everything` / `top-headlines` are joined onto it).
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://newsapi.org/v2/";

/// CoinGecko v3 base (`coins/markets` / `coins/{id}` are joined onto it).
pub(crate) const DEFAULT_BASE_MARKETS: &str = "https://api.coingecko.com/api/v3/";
