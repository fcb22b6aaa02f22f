mod api;
mod model;
mod wire;

pub use model::Article;

use crate::{TrackerClient, TrackerError};

/// Query used when the caller does not name one.
pub const DEFAULT_QUERY: &str = "cryptocurrency OR bitcoin OR ethereum";
/// Number of articles requested when the caller does not name a limit.
pub const DEFAULT_LIMIT: u32 = 10;
/// Largest limit the upstream accepts in one page.
pub const MAX_LIMIT: u32 = api::MAX_PAGE_SIZE;
/// Country used for top headlines when none is given.
pub const DEFAULT_COUNTRY: &str = "us";

/// A builder for searching news articles, newest first.
#[derive(Debug, Clone)]
pub struct NewsBuilder {
    client: TrackerClient,
    query: String,
    limit: u32,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a search query.
    pub fn new(client: &TrackerClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Creates a builder for the default crypto query.
    pub fn latest(client: &TrackerClient) -> Self {
        Self::new(client, DEFAULT_QUERY)
    }

    /// Sets the maximum number of articles to return (sent upstream as `pageSize`).
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Executes the search.
    ///
    /// The result holds at most `limit` articles, in upstream order, without repeated URLs.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParams` for a blank query or an out-of-range limit (before any
    /// request is sent). Otherwise returns an upstream error if the request fails, the
    /// API answers with an error envelope or non-2xx status, or an article fails validation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(query = %self.query, limit = self.limit))
    )]
    pub async fn fetch(self) -> Result<Vec<Article>, TrackerError> {
        let query = self.query.trim();
        if query.is_empty() {
            return Err(TrackerError::InvalidParams("news query must not be empty".into()));
        }
        let limit = api::check_page_size(self.limit)?;
        let url = api::everything_url(&self.client, query, limit)?;
        api::fetch_articles(&self.client, url, limit).await
    }
}

/// A builder for the top-headlines feed of one country.
#[derive(Debug, Clone)]
pub struct HeadlinesBuilder {
    client: TrackerClient,
    country: String,
    limit: u32,
}

impl HeadlinesBuilder {
    pub fn new(client: &TrackerClient) -> Self {
        Self {
            client: client.clone(),
            country: DEFAULT_COUNTRY.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the two-letter country code (e.g. `us`, `gb`).
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Same as [`NewsBuilder::fetch`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(country = %self.country))
    )]
    pub async fn fetch(self) -> Result<Vec<Article>, TrackerError> {
        let country = self.country.trim().to_ascii_lowercase();
        if country.len() != 2 {
            return Err(TrackerError::InvalidParams(format!(
                "country must be a two-letter code, got `{}`",
                self.country
            )));
        }
        let limit = api::check_page_size(self.limit)?;
        let url = api::headlines_url(&self.client, &country, limit)?;
        api::fetch_articles(&self.client, url, limit).await
    }
}
