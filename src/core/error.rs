use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// An error occurred during an HTTP request (connect failure, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON for the expected envelope.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The requested resource does not exist upstream (HTTP 404).
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that returned the error.
        url: String,
    },

    /// The upstream rejected the request because of its rate limit (HTTP 429).
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that returned the error.
        url: String,
    },

    /// The upstream failed with a server-side error (HTTP 5xx).
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The news API answered with its own `{"status":"error"}` envelope.
    #[error("News API error {status} ({code}): {message}")]
    Api {
        /// The HTTP status code of the response carrying the envelope.
        status: u16,
        /// The machine-readable error code, e.g. `apiKeyInvalid`.
        code: String,
        /// The human-readable message.
        message: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// No usable news API key is configured.
    #[error(
        "NEWS_API_KEY is not set: create a .env file (or export the variable) with a valid NewsAPI key"
    )]
    MissingApiKey,

    /// The client configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The caller passed parameters that can never produce a valid request.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

impl TrackerError {
    /// Returns `true` when the error originated from talking to an upstream API
    /// (transport, HTTP status, or response shape), as opposed to local configuration
    /// or caller mistakes.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Http(_)
                | Self::Json(_)
                | Self::Status { .. }
                | Self::NotFound { .. }
                | Self::RateLimited { .. }
                | Self::ServerError { .. }
                | Self::Api { .. }
                | Self::Data(_)
        )
    }

    /// The upstream HTTP status code, when one is known.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Status { status, .. }
            | Self::ServerError { status, .. }
            | Self::Api { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            _ => None,
        }
    }

    /// Returns `true` when the request gave up because the client timeout elapsed.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
