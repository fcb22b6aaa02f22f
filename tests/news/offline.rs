use crypto_news::{ExecutionMode, NewsBuilder, Tracker, TrackerError};
use httpmock::{Method::GET, MockServer};

use crate::common::{TEST_KEY, client_for, fixture};

#[tokio::test]
async fn search_sends_query_and_omits_key_in_development() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/everything")
            .query_param("q", "bitcoin")
            .query_param("sortBy", "publishedAt")
            .query_param("language", "en")
            .query_param("pageSize", "10")
            .query_param_missing("apiKey");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_everything.json"));
    });

    let client = client_for(&server, ExecutionMode::Development);
    let articles = Tracker::new(&client).news("bitcoin", 10).await.unwrap();

    mock.assert();
    // The third entry repeats the first URL.
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].source, "CoinDesk");
    assert_eq!(articles[0].author.as_deref(), Some("Jane Doe"));
    assert_eq!(articles[1].title, "Ethereum developers schedule next network upgrade");
    assert!(articles[1].description.is_none());
    assert!(articles[0].published_at > articles[1].published_at);
}

#[tokio::test]
async fn search_attaches_key_in_production() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/everything")
            .query_param("q", "ethereum")
            .query_param("apiKey", TEST_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_everything.json"));
    });

    let client = client_for(&server, ExecutionMode::Production);
    let articles = NewsBuilder::new(&client, "ethereum").fetch().await.unwrap();

    mock.assert();
    assert!(!articles.is_empty());
}

#[tokio::test]
async fn search_caps_to_limit_without_duplicates() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/everything").query_param("pageSize", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_everything.json"));
    });

    let client = client_for(&server, ExecutionMode::Development);
    let articles = Tracker::new(&client).news("bitcoin", 1).await.unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].url, "https://news.example.com/bitcoin-etf-inflows");
}

#[tokio::test]
async fn error_envelope_maps_to_api_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/everything");
        then.status(401)
            .header("content-type", "application/json")
            .body(fixture("news_error_apikey.json"));
    });

    let client = client_for(&server, ExecutionMode::Production);
    let err = Tracker::new(&client).news("bitcoin", 5).await.unwrap_err();

    match &err {
        TrackerError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(*status, 401);
            assert_eq!(code, "apiKeyInvalid");
            assert!(message.contains("invalid"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(err.is_upstream());
    assert!(!err.to_string().contains(TEST_KEY));
}

#[tokio::test]
async fn server_error_redacts_key_from_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/everything");
        then.status(503).body("upstream down");
    });

    let client = client_for(&server, ExecutionMode::Production);
    let err = Tracker::new(&client).news("bitcoin", 5).await.unwrap_err();

    assert!(matches!(err, TrackerError::ServerError { status: 503, .. }));
    assert!(!err.to_string().contains(TEST_KEY));
}

#[tokio::test]
async fn invalid_input_is_rejected_before_any_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200).body("{}");
    });

    let client = client_for(&server, ExecutionMode::Development);
    let tracker = Tracker::new(&client);

    assert!(matches!(
        tracker.news("   ", 5).await,
        Err(TrackerError::InvalidParams(_))
    ));
    assert!(matches!(
        tracker.news("bitcoin", 0).await,
        Err(TrackerError::InvalidParams(_))
    ));
    assert!(matches!(
        tracker.news("bitcoin", 101).await,
        Err(TrackerError::InvalidParams(_))
    ));
    mock.assert_calls(0);
}

#[tokio::test]
async fn headlines_request_country_feed() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/top-headlines")
            .query_param("country", "gb")
            .query_param("pageSize", "3");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_everything.json"));
    });

    let client = client_for(&server, ExecutionMode::Development);
    let articles = Tracker::new(&client).headlines("gb", 3).await.unwrap();

    mock.assert();
    assert_eq!(articles.len(), 2);
}
