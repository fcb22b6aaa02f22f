//! crypto-news-rs: async aggregation client for crypto news and market data.
//!
//! Two upstreams are wrapped behind typed builders:
//! - news search and headlines from NewsAPI ([`news`]);
//! - market listing and coin details from CoinGecko ([`coins`]).
//!
//! [`dashboard`] fans out to both at once and degrades a failing source to an empty
//! list instead of failing the whole call. [`Tracker`] bundles the common operations.

pub mod coins;
pub mod core;
pub mod dashboard;
pub mod news;
mod tracker;

pub use coins::{Coin, CoinDetail, CoinDetailBuilder, MarketsBuilder};
pub use crate::core::{
    ExecutionMode, Settled, SourceFailure, TrackerClient, TrackerClientBuilder, TrackerConfig,
    TrackerError,
};
pub use dashboard::{Dashboard, DashboardBuilder};
pub use news::{Article, HeadlinesBuilder, NewsBuilder};
pub use tracker::Tracker;
