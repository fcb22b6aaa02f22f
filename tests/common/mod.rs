#![allow(dead_code)]

use std::{fs, path::PathBuf, time::Duration};

use crypto_news::{ExecutionMode, TrackerClient, TrackerClientBuilder, TrackerConfig};
use httpmock::MockServer;
use url::Url;

pub const TEST_KEY: &str = "test-key-123";

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

/// A client whose news and market bases both point at `server`.
pub fn client_for(server: &MockServer, mode: ExecutionMode) -> TrackerClient {
    builder_for(server, mode).build().unwrap()
}

pub fn client_with_timeout(
    server: &MockServer,
    mode: ExecutionMode,
    timeout: Duration,
) -> TrackerClient {
    builder_for(server, mode).timeout(timeout).build().unwrap()
}

fn builder_for(server: &MockServer, mode: ExecutionMode) -> TrackerClientBuilder {
    let base = Url::parse(&server.base_url()).unwrap();
    TrackerClient::builder()
        .base_news(base.clone())
        .base_markets(base)
        .config(TrackerConfig::new(Some(TEST_KEY.to_string()), mode))
}
