//! Tweet posting action.

use tracing::{debug, warn};

use crate::client::TwitterApiClient;
use crate::reply::Reply;
use crate::types::CreateTweetRequest;

/// Posts a tweet with the given content.
///
/// The content is deliberately not validated here, empty included;
/// the remote service is the validator of record for tweet content
/// (length, duplicates, and so on).
#[derive(Debug, Clone)]
pub struct PostTweet {
    content: String,
}

impl PostTweet {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Issue one status-post call. Fire-and-forget: the reply renders
    /// as integer 0 on success, 1 on remote failure.
    pub async fn execute(&self, client: &TwitterApiClient) -> Reply {
        let request = CreateTweetRequest {
            text: self.content.clone(),
        };

        match client.create_tweet(&request).await {
            Ok(response) => {
                debug!(tweet_id = %response.data.id, "tweet posted");
                Reply::Done
            }
            Err(error) => {
                warn!(%error, "failed to post tweet");
                Reply::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::test_client;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn posting_succeeds_with_code_zero() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .and(body_json(serde_json::json!({"text": "hello from a bot"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": {"id": "111", "text": "hello from a bot"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = PostTweet::new("hello from a bot").execute(&client).await;

        assert_eq!(reply, Reply::Done);
        assert_eq!(reply.status_code(), 0);
    }

    #[tokio::test]
    async fn remote_failure_yields_code_one() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "title": "Forbidden",
                "detail": "You are not allowed to create a Tweet with duplicate content."
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = PostTweet::new("again").execute(&client).await;

        assert_eq!(reply, Reply::Failed);
        assert_eq!(reply.status_code(), 1);
    }

    #[test]
    fn empty_content_is_accepted_at_construction() {
        // The remote service enforces content rules, not this action.
        let action = PostTweet::new("");
        assert_eq!(action.content(), "");
    }
}
