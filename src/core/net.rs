use reqwest::header::ACCEPT;
use url::Url;

use crate::core::{TrackerClient, TrackerError};

/// Query parameter that carries the news API key; never echoed into errors or logs.
pub(crate) const API_KEY_PARAM: &str = "apiKey";

/// Status, final URL and body of a completed GET.
pub(crate) struct RawResponse {
    pub(crate) status: u16,
    pub(crate) url: String,
    pub(crate) body: String,
}

impl RawResponse {
    pub(crate) const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Maps a non-2xx status onto the matching error variant.
    pub(crate) fn into_status_error(self) -> TrackerError {
        status_error(self.status, self.url)
    }
}

/// Sends a JSON GET and reads the whole body as text.
///
/// Non-2xx responses are returned as-is so callers can inspect an error envelope
/// before mapping the status.
pub(crate) async fn get(client: &TrackerClient, url: Url) -> Result<RawResponse, TrackerError> {
    let resp = client
        .http()
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| TrackerError::Http(e.without_url()))?;

    let status = resp.status().as_u16();
    let url = redact(resp.url());
    let body = resp
        .text()
        .await
        .map_err(|e| TrackerError::Http(e.without_url()))?;

    Ok(RawResponse { status, url, body })
}

pub(crate) fn status_error(status: u16, url: String) -> TrackerError {
    match status {
        404 => TrackerError::NotFound { url },
        429 => TrackerError::RateLimited { url },
        500..=599 => TrackerError::ServerError { status, url },
        _ => TrackerError::Status { status, url },
    }
}

/// Renders `url` without the API key parameter.
pub(crate) fn redact(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == API_KEY_PARAM) {
        return url.to_string();
    }
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != API_KEY_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let mut clean = url.clone();
    if kept.is_empty() {
        clean.set_query(None);
    } else {
        clean.query_pairs_mut().clear().extend_pairs(kept);
    }
    clean.to_string()
}
