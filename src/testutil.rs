//! Shared test helpers.

use crate::client::TwitterApiClient;
use crate::config::TwitterConfig;

/// Config with dummy credentials pointing at a mock server.
pub(crate) fn test_config(uri: &str) -> TwitterConfig {
    TwitterConfig {
        consumer_key: "test_consumer_key".into(),
        consumer_secret: "test_consumer_secret".into(),
        access_token: "test_access_token".into(),
        access_token_secret: "test_access_token_secret".into(),
        api_url: uri.to_string(),
        ..Default::default()
    }
}

/// Client wired to a mock server.
pub(crate) fn test_client(uri: &str) -> TwitterApiClient {
    TwitterApiClient::new(&test_config(uri)).unwrap()
}
