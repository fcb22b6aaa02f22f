use std::collections::HashSet;

use url::Url;

use crate::{
    core::{
        TrackerClient, TrackerError,
        conversions::parse_rfc3339,
        net::{self, API_KEY_PARAM},
    },
    news::{model::Article, wire},
};

/// NewsAPI rejects `pageSize` above this.
pub(crate) const MAX_PAGE_SIZE: u32 = 100;

pub(super) fn everything_url(
    client: &TrackerClient,
    query: &str,
    page_size: u32,
) -> Result<Url, TrackerError> {
    let mut url = client.base_news().join("everything")?;
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("q", query)
            .append_pair("sortBy", "publishedAt")
            .append_pair("language", "en")
            .append_pair("pageSize", &page_size.to_string());
        if let Some(key) = client.config().request_api_key() {
            qp.append_pair(API_KEY_PARAM, key);
        }
    }
    Ok(url)
}

pub(super) fn headlines_url(
    client: &TrackerClient,
    country: &str,
    page_size: u32,
) -> Result<Url, TrackerError> {
    let mut url = client.base_news().join("top-headlines")?;
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("country", country)
            .append_pair("pageSize", &page_size.to_string());
        if let Some(key) = client.config().request_api_key() {
            qp.append_pair(API_KEY_PARAM, key);
        }
    }
    Ok(url)
}

pub(super) fn check_page_size(limit: u32) -> Result<u32, TrackerError> {
    if limit == 0 || limit > MAX_PAGE_SIZE {
        return Err(TrackerError::InvalidParams(format!(
            "news limit must be between 1 and {MAX_PAGE_SIZE}, got {limit}"
        )));
    }
    Ok(limit)
}

pub(super) async fn fetch_articles(
    client: &TrackerClient,
    url: Url,
    limit: u32,
) -> Result<Vec<Article>, TrackerError> {
    let resp = net::get(client, url).await?;
    let status = resp.status;

    if !resp.is_success() {
        // NewsAPI explains most failures (bad key, bad params) in a JSON envelope.
        return Err(match serde_json::from_str::<wire::NewsEnvelope>(&resp.body) {
            Ok(env) if env.code.is_some() || env.message.is_some() => api_error(status, env),
            _ => resp.into_status_error(),
        });
    }

    let envelope: wire::NewsEnvelope = serde_json::from_str(&resp.body)?;
    parse_articles(status, envelope, limit)
}

fn api_error(status: u16, env: wire::NewsEnvelope) -> TrackerError {
    TrackerError::Api {
        status,
        code: env.code.unwrap_or_else(|| "unknown".into()),
        message: env.message.unwrap_or_default(),
    }
}

/// Validates every article, drops repeats of the same URL, and caps the list at `limit`.
pub(super) fn parse_articles(
    status: u16,
    envelope: wire::NewsEnvelope,
    limit: u32,
) -> Result<Vec<Article>, TrackerError> {
    if envelope.status.as_deref() != Some("ok") {
        return Err(api_error(status, envelope));
    }

    let raw = envelope.articles.ok_or_else(|| {
        TrackerError::Data("news response is missing the `articles` array".into())
    })?;

    let cap = limit as usize;
    let mut seen = HashSet::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len().min(cap));
    for (idx, item) in raw.into_iter().enumerate() {
        if out.len() == cap {
            break;
        }
        let article = article_from_wire(idx, item)?;
        if seen.insert(article.url.clone()) {
            out.push(article);
        }
    }
    Ok(out)
}

fn article_from_wire(idx: usize, raw: wire::RawArticle) -> Result<Article, TrackerError> {
    let missing = |field: &str| TrackerError::Data(format!("article #{idx} is missing `{field}`"));

    let title = non_empty(raw.title).ok_or_else(|| missing("title"))?;
    let url = non_empty(raw.url).ok_or_else(|| missing("url"))?;
    let source = non_empty(raw.source.and_then(|s| s.name)).ok_or_else(|| missing("source.name"))?;
    let published_raw = raw.published_at.ok_or_else(|| missing("publishedAt"))?;
    let published_at = parse_rfc3339(&published_raw).ok_or_else(|| {
        TrackerError::Data(format!(
            "article #{idx} has an invalid `publishedAt`: {published_raw}"
        ))
    })?;

    Ok(Article {
        title,
        source,
        published_at,
        url,
        description: non_empty(raw.description),
        author: non_empty(raw.author),
    })
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
