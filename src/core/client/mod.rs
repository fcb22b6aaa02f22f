//! Public client surface + builder.
//! Defaults (UA, upstream bases) live in `constants`.

mod constants;

use crate::core::{TrackerConfig, TrackerError};
use constants::{DEFAULT_BASE_MARKETS, DEFAULT_BASE_NEWS, USER_AGENT};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Shared handle to both upstreams.
///
/// Cloning is cheap: the connection pool and configuration are reference-counted,
/// so concurrent requests each own their request/response cycle without locking.
#[derive(Debug, Clone)]
pub struct TrackerClient {
    http: Client,
    base_news: Url,
    base_markets: Url,
    config: Arc<TrackerConfig>,
}

impl TrackerClient {
    /// Create a new builder.
    pub fn builder() -> TrackerClientBuilder {
        TrackerClientBuilder::default()
    }

    /// Builds a client with default endpoints for the given configuration.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be constructed.
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        Self::builder().config(config).build()
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_markets(&self) -> &Url {
        &self.base_markets
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct TrackerClientBuilder {
    user_agent: Option<String>,
    base_news: Option<Url>,
    base_markets: Option<Url>,
    config: Option<TrackerConfig>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl TrackerClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the news API base (e.g., `https://newsapi.org/v2/`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the market-data API base (e.g., `https://api.coingecko.com/api/v3/`).
    #[must_use]
    pub fn base_markets(mut self, url: Url) -> Self {
        self.base_markets = Some(url);
        self
    }

    /// Use this configuration (API key, execution mode, timeout).
    #[must_use]
    pub fn config(mut self, config: TrackerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set a global request timeout (overall), overriding the one in the configuration.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails if a default base URL cannot be parsed or the HTTP client cannot be built.
    pub fn build(self) -> Result<TrackerClient, TrackerError> {
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };
        let base_markets = match self.base_markets {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_MARKETS)?,
        };
        let config = self.config.unwrap_or_default();

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout.or(config.timeout()) {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(TrackerClient {
            http,
            base_news: with_trailing_slash(base_news),
            base_markets: with_trailing_slash(base_markets),
            config: Arc::new(config),
        })
    }
}

/// `Url::join` drops the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
