use std::time::{Duration, Instant};

use crypto_news::{
    DashboardBuilder, ExecutionMode, Tracker,
    dashboard::{COINS_SOURCE, NEWS_SOURCE},
};
use httpmock::{Method::GET, MockServer};

use crate::common::{client_for, client_with_timeout, fixture};

fn mock_markets<'a>(server: &'a MockServer, per_page: &str) -> httpmock::Mock<'a> {
    let per_page = per_page.to_string();
    server.mock(move |when, then| {
        when.method(GET).path("/coins/markets").query_param("per_page", per_page);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("coins_markets.json"));
    })
}

#[tokio::test]
async fn dashboard_combines_both_sources_in_order() {
    let server = MockServer::start();
    let markets = mock_markets(&server, "3");
    let news = server.mock(|when, then| {
        when.method(GET)
            .path("/everything")
            .query_param("q", "bitcoin OR ethereum")
            .query_param("pageSize", "2");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_everything.json"));
    });

    let client = client_for(&server, ExecutionMode::Development);
    let board = DashboardBuilder::new(&client)
        .coin_limit(3)
        .news_limit(2)
        .fetch()
        .await;

    markets.assert();
    news.assert();
    assert!(board.is_complete());
    let ids: Vec<_> = board.coins.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["bitcoin", "ethereum", "tether"]);
    assert_eq!(board.news.len(), 2);
    assert_eq!(board.news[0].source, "CoinDesk");
    assert_eq!(board.news[1].source, "The Block");
}

#[tokio::test]
async fn failing_news_degrades_to_empty_list() {
    let server = MockServer::start();
    mock_markets(&server, "5");
    server.mock(|when, then| {
        when.method(GET).path("/everything");
        then.status(500).body("internal error");
    });

    let client = client_for(&server, ExecutionMode::Development);
    let board = Tracker::new(&client).dashboard().await;

    assert_eq!(board.coins.len(), 5);
    assert!(board.news.is_empty());
    assert!(!board.is_complete());
    let failure = board.failure(NEWS_SOURCE).unwrap();
    assert_eq!(failure.status, Some(500));
    assert!(!failure.timed_out);
    assert!(board.failure(COINS_SOURCE).is_none());
}

#[tokio::test]
async fn both_sources_failing_still_yields_a_dashboard() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/coins/markets");
        then.status(429);
    });
    server.mock(|when, then| {
        when.method(GET).path("/everything");
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"status\":\"ok\"}");
    });

    let client = client_for(&server, ExecutionMode::Development);
    let board = Tracker::new(&client).dashboard().await;

    assert!(board.coins.is_empty());
    assert!(board.news.is_empty());
    assert_eq!(board.failures.len(), 2);
    assert_eq!(board.failure(COINS_SOURCE).unwrap().status, Some(429));
    // A missing `articles` array is a data error with no status.
    assert_eq!(board.failure(NEWS_SOURCE).unwrap().status, None);
}

#[tokio::test]
async fn sources_are_fetched_concurrently() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/coins/markets");
        then.status(200)
            .header("content-type", "application/json")
            .delay(Duration::from_secs(1))
            .body(fixture("coins_markets.json"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/everything");
        then.status(200)
            .header("content-type", "application/json")
            .delay(Duration::from_secs(1))
            .body(fixture("news_everything.json"));
    });

    let client = client_for(&server, ExecutionMode::Development);
    let started = Instant::now();
    let board = Tracker::new(&client).dashboard().await;
    let elapsed = started.elapsed();

    assert!(board.is_complete());
    assert!(
        elapsed < Duration::from_millis(1800),
        "dashboard took {elapsed:?}; sources were not fetched concurrently"
    );
}

#[tokio::test]
async fn slow_source_times_out_and_degrades() {
    let server = MockServer::start();
    mock_markets(&server, "5");
    server.mock(|when, then| {
        when.method(GET).path("/everything");
        then.status(200)
            .header("content-type", "application/json")
            .delay(Duration::from_secs(3))
            .body(fixture("news_everything.json"));
    });

    let client =
        client_with_timeout(&server, ExecutionMode::Development, Duration::from_millis(500));
    let board = Tracker::new(&client).dashboard().await;

    assert_eq!(board.coins.len(), 5);
    assert!(board.news.is_empty());
    let failure = board.failure(NEWS_SOURCE).unwrap();
    assert!(failure.timed_out, "expected a timeout, got {failure:?}");
    assert_eq!(failure.status, None);
}
