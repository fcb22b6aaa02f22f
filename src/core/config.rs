//! Immutable runtime configuration handed to the client at construction time.

use std::fmt;
use std::time::Duration;

use crate::core::TrackerError;

/// Placeholder value shipped in sample `.env` files; treated the same as "unset".
pub const PLACEHOLDER_API_KEY: &str = "YOUR_NEWS_API_KEY_HERE";

/// Default overall timeout applied to every upstream request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the process is running. Only `Production` attaches the news API key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Local or staging runs. The news key is never sent.
    #[default]
    Development,
    /// Deployed runs. The news key is sent with every news request.
    Production,
}

impl ExecutionMode {
    /// The lowercase name used in environment variables and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl From<&str> for ExecutionMode {
    /// `production` / `prod` (any case) selects `Production`; anything else is `Development`.
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a [`TrackerClient`](crate::TrackerClient).
///
/// Built once at startup and never mutated. Request paths read from it, never
/// from the process environment.
#[derive(Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    news_api_key: Option<String>,
    mode: ExecutionMode,
    timeout: Option<Duration>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            news_api_key: None,
            mode: ExecutionMode::Development,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("news_api_key", &self.news_api_key.as_ref().map(|_| "<redacted>"))
            .field("mode", &self.mode)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl TrackerConfig {
    /// Creates a configuration with the given key and mode and the default timeout.
    ///
    /// Blank keys are stored as `None`.
    pub fn new(news_api_key: Option<String>, mode: ExecutionMode) -> Self {
        Self {
            news_api_key: news_api_key.filter(|k| !k.trim().is_empty()),
            mode,
            ..Self::default()
        }
    }

    /// Replaces the overall request timeout. `None` disables it.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the execution mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn mode(&self) -> ExecutionMode {
        self.mode
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The configured key, if any, regardless of mode.
    #[must_use]
    pub fn news_api_key(&self) -> Option<&str> {
        self.news_api_key.as_deref()
    }

    /// The key to attach to an outbound news request.
    ///
    /// `None` outside `Production`: the `apiKey` parameter must then be left off the URL.
    #[must_use]
    pub fn request_api_key(&self) -> Option<&str> {
        match self.mode {
            ExecutionMode::Production => self.news_api_key(),
            ExecutionMode::Development => None,
        }
    }

    /// Returns the key or fails with [`TrackerError::MissingApiKey`] if it is unset
    /// or still the sample placeholder.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` when no real key is configured.
    pub fn require_news_api_key(&self) -> Result<&str, TrackerError> {
        match self.news_api_key() {
            Some(k) if k != PLACEHOLDER_API_KEY => Ok(k),
            _ => Err(TrackerError::MissingApiKey),
        }
    }
}
