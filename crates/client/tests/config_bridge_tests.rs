//! Tests for building a client from a loaded configuration.

mod common;

use std::time::Duration;

use common::*;
use loggly_config::{Config, ConfigLoader, Credentials};
use wiremock::matchers::{header, method, path};

#[test]
fn test_client_from_loader_config() {
    let config = ConfigLoader::new()
        .with_account("acme".to_string())
        .with_username("alice".to_string())
        .with_password("s3cret".to_string())
        .with_max_retries(5)
        .with_timeout(Duration::from_secs(45))
        .build()
        .unwrap();

    let client = LogglyClient::builder().from_config(&config).build().unwrap();

    assert_eq!(client.base_url(), "http://acme.loggly.com");
    assert_eq!(client.username(), "alice");
    assert_eq!(client.transport().policy().max_retries, 5);
    assert_eq!(client.transport().policy().min, Duration::from_secs(5));
}

#[test]
fn test_invalid_account_in_config_rejected_by_client() {
    let config = Config::new("acme.evil.com", Credentials::new("alice", "s3cret"));
    let err = LogglyClient::builder().from_config(&config).build().unwrap_err();
    assert!(matches!(err, ClientError::InvalidUrl(_)));
}

#[tokio::test]
async fn test_config_credentials_reach_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apiv2/search"))
        .and(header("authorization", ALICE_BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture_str(
            "search/search_success.json",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config::new("acme", Credentials::new("alice", "s3cret"));
    let client = LogglyClient::builder()
        .from_config(&config)
        .base_url(mock_server.uri())
        .max_retries(0)
        .build()
        .unwrap();

    client.search().execute(10, "*").await.unwrap();
}
