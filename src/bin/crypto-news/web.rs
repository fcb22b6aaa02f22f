//! Landing and search pages served over HTTP.

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use crypto_news::{Article, Dashboard, Tracker};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use url::Url;

use crate::console::{format_change, format_price};

/// Articles requested by the search page.
pub const SEARCH_LIMIT: u32 = 20;

#[derive(Clone)]
pub struct WebState {
    pub tracker: Tracker,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
}

pub fn router(state: WebState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/search", get(search))
        .with_state(state)
}

/// Binds by host name or address, so `localhost` resolves like `127.0.0.1`.
async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))
}

pub async fn serve(tracker: Tracker, host: &str, port: u16) -> Result<()> {
    let listener = bind(host, port).await?;
    let addr = listener.local_addr().context("listener has no local address")?;
    info!("Server is running on http://{addr}");

    axum::serve(listener, router(WebState { tracker }))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

async fn index(State(st): State<WebState>) -> Html<String> {
    let board = st.tracker.dashboard().await;
    Html(render_dashboard(&board))
}

async fn search(State(st): State<WebState>, Query(params): Query<SearchParams>) -> Response {
    let keyword = params
        .keyword
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty());

    let Some(keyword) = keyword else {
        return Html(render_search(None, &[])).into_response();
    };

    match st.tracker.news(keyword, SEARCH_LIMIT).await {
        Ok(articles) => Html(render_search(Some(keyword), &articles)).into_response(),
        Err(e) if e.is_upstream() => {
            warn!(keyword, error = %e, "search failed");
            (
                StatusCode::BAD_GATEWAY,
                Html(render_message(&format!(
                    "Error fetching news for keyword: {keyword}"
                ))),
            )
                .into_response()
        }
        Err(e) => {
            error!(keyword, error = %e, "unexpected search failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_message("An unexpected server error occurred.")),
            )
                .into_response()
        }
    }
}

/* ---------------- HTML ---------------- */

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
    <style>
      body {{ font-family: ui-sans-serif, system-ui, sans-serif; }}
      body {{ max-width: 960px; margin: 0 auto; padding: 24px; }}
      nav a {{ margin-right: 12px; }}
      table {{ border-collapse: collapse; width: 100%; }}
      td, th {{ padding: 6px 8px; border-bottom: 1px solid #ddd; text-align: left; }}
      .up {{ color: #1a7f37; }} .down {{ color: #cf222e; }}
      .notice {{ background: #fff8c5; padding: 8px 12px; border-radius: 6px; }}
      .meta {{ color: #666; font-size: 0.9em; }}
    </style>
  </head>
  <body>
    <nav><a href="/">Dashboard</a><a href="/search">Search news</a></nav>
{body}
  </body>
</html>
"#,
        title = escape_html(title),
    )
}

/// Only `http` and `https` links are rendered as anchors.
fn safe_href(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| escape_html(url.as_str()))
}

fn article_items(articles: &[Article]) -> String {
    articles
        .iter()
        .map(|a| {
            let title = escape_html(&a.title);
            let headline = match safe_href(&a.url) {
                Some(href) => format!("<a href=\"{href}\">{title}</a>"),
                None => title,
            };
            format!(
                "      <li>{headline} <span class=\"meta\">{} &middot; {}</span></li>\n",
                escape_html(&a.source),
                a.published_at.format("%Y-%m-%d %H:%M UTC"),
            )
        })
        .collect()
}

pub fn render_dashboard(board: &Dashboard) -> String {
    let mut body = String::from("    <h1>Crypto dashboard</h1>\n");

    for f in &board.failures {
        body.push_str(&format!(
            "    <p class=\"notice\">{} data is temporarily unavailable.</p>\n",
            escape_html(&f.source)
        ));
    }

    body.push_str("    <h2>Top coins</h2>\n");
    if board.coins.is_empty() {
        body.push_str("    <p>No coin data.</p>\n");
    } else {
        body.push_str("    <table>\n");
        body.push_str("      <tr><th>#</th><th>Name</th><th>Price</th><th>24h</th></tr>\n");
        for c in &board.coins {
            let class = match c.price_change_percentage_24h {
                Some(ch) if ch.is_sign_negative() => "down",
                _ => "up",
            };
            body.push_str(&format!(
                concat!(
                    "      <tr><td>{}</td><td>{} <span class=\"meta\">{}</span></td>",
                    "<td>{}</td><td class=\"{class}\">{}</td></tr>\n"
                ),
                c.market_cap_rank.map_or_else(String::new, |r| r.to_string()),
                escape_html(&c.name),
                escape_html(&c.symbol.to_uppercase()),
                format_price(Some(c.current_price)),
                format_change(c.price_change_percentage_24h),
                class = class,
            ));
        }
        body.push_str("    </table>\n");
    }

    body.push_str("    <h2>Latest news</h2>\n");
    if board.news.is_empty() {
        body.push_str("    <p>No news.</p>\n");
    } else {
        body.push_str("    <ul>\n");
        body.push_str(&article_items(&board.news));
        body.push_str("    </ul>\n");
    }

    page("Crypto dashboard", &body)
}

pub fn render_search(keyword: Option<&str>, articles: &[Article]) -> String {
    let value = keyword.map(escape_html).unwrap_or_default();
    let mut body = format!(
        concat!(
            "    <h1>Search news</h1>\n",
            "    <form action=\"/search\" method=\"get\">\n",
            "      <input name=\"keyword\" value=\"{value}\" />\n",
            "      <button type=\"submit\">Search</button>\n",
            "    </form>\n"
        ),
        value = value
    );

    if let Some(k) = keyword {
        if articles.is_empty() {
            body.push_str(&format!(
                "    <p>No news found for &quot;{}&quot;.</p>\n",
                escape_html(k)
            ));
        } else {
            body.push_str(&format!(
                "    <p>{} results for &quot;{}&quot;</p>\n    <ul>\n",
                articles.len(),
                escape_html(k)
            ));
            body.push_str(&article_items(articles));
            body.push_str("    </ul>\n");
        }
    }

    page("Search news", &body)
}

fn render_message(msg: &str) -> String {
    page("Error", &format!("    <p>{}</p>\n", escape_html(msg)))
}
