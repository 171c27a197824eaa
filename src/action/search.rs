//! Tweet search action.

use std::collections::HashMap;

use tracing::warn;

use crate::action::{author_line, epoch_seconds, require_in_range, require_non_empty};
use crate::client::TwitterApiClient;
use crate::error::ValidationError;
use crate::reply::{Attachment, Reply};
use crate::types::User;

/// The default number of tweets to return per page.
pub const DEFAULT_RESULTS_PER_PAGE: u32 = 15;

/// The maximum number of tweets this action can return per page.
pub const MAX_RESULTS_PER_PAGE: u32 = 100;

/// Searches recent tweets matching a query and maps each hit to an
/// [`Attachment`]. Only the first page of results is returned.
#[derive(Debug, Clone)]
pub struct SearchTweets {
    query: String,
    results_per_page: u32,
}

impl SearchTweets {
    /// Search with the default page size.
    ///
    /// # Errors
    ///
    /// Fails when `query` is empty.
    pub fn new(query: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_page_size(query, DEFAULT_RESULTS_PER_PAGE)
    }

    /// Search with an explicit page size in
    /// `[1, MAX_RESULTS_PER_PAGE]`.
    ///
    /// # Errors
    ///
    /// Fails when `query` is empty or `results_per_page` is out of
    /// range.
    pub fn with_page_size(
        query: impl Into<String>,
        results_per_page: u32,
    ) -> Result<Self, ValidationError> {
        let query = query.into();
        require_non_empty("query", &query)?;
        require_in_range("results_per_page", results_per_page, 1, MAX_RESULTS_PER_PAGE)?;

        Ok(Self {
            query,
            results_per_page,
        })
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn results_per_page(&self) -> u32 {
        self.results_per_page
    }

    /// Issue one search call and normalize the statuses, in service
    /// order.
    pub async fn execute(&self, client: &TwitterApiClient) -> Reply {
        let response = match client
            .search_recent(&self.query, self.results_per_page)
            .await
        {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, query = %self.query, "tweet search failed");
                return Reply::Failed;
            }
        };

        let users: HashMap<&str, &User> = response
            .includes
            .as_ref()
            .map(|includes| {
                includes
                    .users
                    .iter()
                    .map(|user| (user.id.as_str(), user))
                    .collect()
            })
            .unwrap_or_default();

        let attachments = response
            .data
            .unwrap_or_default()
            .iter()
            .map(|tweet| {
                let author = tweet
                    .author_id
                    .as_deref()
                    .and_then(|id| users.get(id).copied());
                Attachment::new(
                    author_line(author),
                    tweet.text.clone(),
                    epoch_seconds(tweet.created_at.as_deref()),
                )
            })
            .collect();

        Reply::from_attachments(attachments)
    }
}
