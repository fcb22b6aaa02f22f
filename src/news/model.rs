use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single news article returned by the news search upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// The headline of the article.
    pub title: String,
    /// The publisher (e.g., "Reuters", "CoinDesk").
    pub source: String,
    /// When the article was published.
    pub published_at: DateTime<Utc>,
    /// A direct link to the article.
    pub url: String,
    /// Short summary, when the upstream has one.
    pub description: Option<String>,
    pub author: Option<String>,
}
