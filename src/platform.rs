//! The platform entry surface for the hosting runtime.

use std::sync::Arc;

use tracing::info;

use crate::action::{
    ActionRequest, GetTrends, ListDirectMessages, PostTweet, SearchTweets, SendDirectMessage,
};
use crate::client::TwitterApiClient;
use crate::config::TwitterConfig;
use crate::error::{TwitterError, TwitterResult, ValidationError};
use crate::reply::Reply;
use crate::types::User;

/// The Twitter platform: one authenticated client shared read-only by
/// every action.
///
/// Constructed once at startup; cloning is cheap and clones share the
/// same client. Holds no per-call mutable state, so the hosting
/// runtime may dispatch actions from multiple sessions concurrently.
///
/// Entry points that take parameters validate them and return
/// `Err(ValidationError)` as a hard failure; remote failures never
/// surface as errors here, they come back inside the [`Reply`].
#[derive(Debug, Clone)]
pub struct TwitterPlatform {
    client: Arc<TwitterApiClient>,
}

impl TwitterPlatform {
    /// Start the platform from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Config`] when a credential is missing.
    pub fn start(config: &TwitterConfig) -> TwitterResult<Self> {
        let client = TwitterApiClient::new(config)?;
        info!("Twitter platform started");

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// One round-trip confirming the credentials work, returning the
    /// authenticated account. Meant to be called once at startup.
    pub async fn verify_credentials(&self) -> TwitterResult<User> {
        let response = self.client.get_me().await?;
        let user = response.data.ok_or_else(|| TwitterError::Api {
            status: 200,
            message: "no authenticated user in response".into(),
            error_code: None,
        })?;

        info!(username = %user.username, user_id = %user.id, "authenticated");
        Ok(user)
    }

    /// The shared API client, for callers that construct actions
    /// themselves.
    #[must_use]
    pub fn client(&self) -> &TwitterApiClient {
        &self.client
    }

    /// Execute an already-constructed request.
    pub async fn execute(&self, request: &ActionRequest) -> Reply {
        request.execute(&self.client).await
    }

    /// Search recent tweets with the default page size.
    pub async fn search_tweets(&self, query: &str) -> Result<Reply, ValidationError> {
        Ok(SearchTweets::new(query)?.execute(&self.client).await)
    }

    /// Search recent tweets with an explicit page size.
    pub async fn search_tweets_paginated(
        &self,
        query: &str,
        results_per_page: u32,
    ) -> Result<Reply, ValidationError> {
        Ok(SearchTweets::with_page_size(query, results_per_page)?
            .execute(&self.client)
            .await)
    }

    /// Post a tweet.
    pub async fn post_tweet(&self, content: &str) -> Reply {
        PostTweet::new(content).execute(&self.client).await
    }

    /// Send a direct message to a screen name.
    pub async fn send_dm(&self, user: &str, text: &str) -> Result<Reply, ValidationError> {
        Ok(SendDirectMessage::new(user, text)?
            .execute(&self.client)
            .await)
    }

    /// List incoming direct messages with the default page size.
    pub async fn receive_dms(&self) -> Reply {
        ListDirectMessages::new().execute(&self.client).await
    }

    /// List incoming direct messages with an explicit page size.
    pub async fn receive_dms_paginated(
        &self,
        messages_per_page: u32,
    ) -> Result<Reply, ValidationError> {
        Ok(ListDirectMessages::with_page_size(messages_per_page)?
            .execute(&self.client)
            .await)
    }

    /// Worldwide trending topics.
    pub async fn get_trends(&self) -> Reply {
        GetTrends::worldwide().execute(&self.client).await
    }

    /// Trending topics for an explicit WOEID.
    pub async fn get_trends_for_woeid(&self, woeid: i64) -> Result<Reply, ValidationError> {
        Ok(GetTrends::for_woeid(woeid)?.execute(&self.client).await)
    }

    /// Trending topics for a place name.
    pub async fn get_trends_for_place(
        &self,
        location_name: &str,
    ) -> Result<Reply, ValidationError> {
        Ok(GetTrends::for_place(location_name)?
            .execute(&self.client)
            .await)
    }
}
