use crypto_news::{CoinDetailBuilder, ExecutionMode, Tracker, TrackerError};
use httpmock::{Method::GET, MockServer};
use rust_decimal::Decimal;

use crate::common::{client_for, fixture};

#[tokio::test]
async fn markets_keep_upstream_order() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/coins/markets")
            .query_param("vs_currency", "usd")
            .query_param("order", "market_cap_desc")
            .query_param("per_page", "5")
            .query_param("page", "1")
            .query_param("sparkline", "false");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("coins_markets.json"));
    });

    let client = client_for(&server, ExecutionMode::Development);
    let coins = Tracker::new(&client).top_coins(5).await.unwrap();

    mock.assert();
    let ids: Vec<_> = coins.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["bitcoin", "ethereum", "tether", "binancecoin", "solana"]);
    assert_eq!(coins[0].current_price, Decimal::new(640_005, 1));
    assert_eq!(coins[1].price_change_percentage_24h, Some(Decimal::new(-15, 1)));
    assert_eq!(coins[3].high_24h, None);
    assert_eq!(coins[4].market_cap_rank, Some(5));
}

#[tokio::test]
async fn markets_never_exceed_limit() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/coins/markets").query_param("per_page", "2");
        // Upstream ignoring per_page still yields at most two coins.
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("coins_markets.json"));
    });

    let client = client_for(&server, ExecutionMode::Development);
    let coins = Tracker::new(&client).top_coins(2).await.unwrap();

    assert_eq!(coins.len(), 2);
    assert_eq!(coins[1].symbol, "eth");
}

#[tokio::test]
async fn markets_rate_limit_is_reported() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/coins/markets");
        then.status(429).body("{\"status\":{\"error_code\":429}}");
    });

    let client = client_for(&server, ExecutionMode::Development);
    let err = Tracker::new(&client).top_coins(10).await.unwrap_err();

    assert!(matches!(err, TrackerError::RateLimited { .. }));
    assert_eq!(err.status(), Some(429));
}

#[tokio::test]
async fn bitcoin_detail_is_parsed() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/coins/bitcoin")
            .query_param("localization", "false")
            .query_param("tickers", "false");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("coin_bitcoin.json"));
    });

    let client = client_for(&server, ExecutionMode::Development);
    let detail = Tracker::new(&client).default_coin_details().await.unwrap();

    mock.assert();
    assert_eq!(detail.name, "Bitcoin");
    assert_eq!(detail.symbol, "btc");
    assert_eq!(detail.market_cap_rank, Some(1));
    assert_eq!(detail.current_price_usd, Some(Decimal::new(640_005, 1)));
    assert_eq!(detail.homepage.as_deref(), Some("http://www.bitcoin.org"));
    assert!(detail.description.as_deref().is_some_and(|d| d.starts_with("Bitcoin")));
    assert!(detail.last_updated.is_some());
}

#[tokio::test]
async fn unknown_coin_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/coins/unknown-id-xyz");
        then.status(404)
            .header("content-type", "application/json")
            .body("{\"error\":\"coin not found\"}");
    });

    let client = client_for(&server, ExecutionMode::Development);
    let err = CoinDetailBuilder::new(&client, "unknown-id-xyz")
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, TrackerError::NotFound { .. }));
    assert!(err.is_upstream());
}

#[tokio::test]
async fn blank_coin_id_is_rejected() {
    let server = MockServer::start();
    let client = client_for(&server, ExecutionMode::Development);
    let err = Tracker::new(&client).coin_details("  ").await.unwrap_err();
    assert!(matches!(err, TrackerError::InvalidParams(_)));
    assert!(!err.is_upstream());
}
