//! Executable actions over the Twitter API.
//!
//! Each action is an immutable request validated at construction:
//! out-of-range or empty parameters fail fast with a
//! [`ValidationError`] and are never clamped. `execute` performs one
//! logical remote operation against a borrowed [`TwitterApiClient`]
//! and normalizes the result into a [`Reply`]; remote failures are
//! logged and converted into [`Reply::Failed`], never propagated.

mod dm;
mod post;
mod search;
mod trends;

pub use dm::{ListDirectMessages, SendDirectMessage, DEFAULT_MESSAGES_PER_PAGE, MAX_MESSAGES_PER_PAGE};
pub use post::PostTweet;
pub use search::{SearchTweets, DEFAULT_RESULTS_PER_PAGE, MAX_RESULTS_PER_PAGE};
pub use trends::{resolve_woeid, GetTrends, WORLDWIDE_WOEID};

use crate::client::TwitterApiClient;
use crate::error::ValidationError;
use crate::reply::Reply;
use crate::types::User;

/// The set of requests the platform can execute, one variant per
/// action.
#[derive(Debug, Clone)]
pub enum ActionRequest {
    SearchTweets(SearchTweets),
    PostTweet(PostTweet),
    SendDirectMessage(SendDirectMessage),
    ListDirectMessages(ListDirectMessages),
    GetTrends(GetTrends),
}

impl ActionRequest {
    /// Execute the request against `client`.
    pub async fn execute(&self, client: &TwitterApiClient) -> Reply {
        match self {
            Self::SearchTweets(action) => action.execute(client).await,
            Self::PostTweet(action) => action.execute(client).await,
            Self::SendDirectMessage(action) => action.execute(client).await,
            Self::ListDirectMessages(action) => action.execute(client).await,
            Self::GetTrends(action) => action.execute(client).await,
        }
    }
}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Empty { field })
    } else {
        Ok(())
    }
}

pub(crate) fn require_in_range(
    field: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<u32, ValidationError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}

/// "{display name} @{handle}", or "unknown" when the author was not
/// expanded in the response.
pub(crate) fn author_line(user: Option<&User>) -> String {
    user.map_or_else(
        || "unknown".to_string(),
        |u| format!("{} @{}", u.name, u.username),
    )
}

/// Creation time truncated to whole seconds; 0 when the service
/// omitted the timestamp or it does not parse.
pub(crate) fn epoch_seconds(created_at: Option<&str>) -> i64 {
    created_at
        .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
        .map_or(0, |dt| dt.timestamp())
}
