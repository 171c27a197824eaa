//! Twitter wire types.
//!
//! Only the surface the actions actually touch: the API v2 envelope
//! and tweet/user/DM objects, plus the v1.1 trend objects (trends
//! never made it to v2).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// API v2 envelope
// ─────────────────────────────────────────────────────────────────────────────

/// Standard Twitter API v2 response wrapper.
///
/// The fields stay plain `Option`s with no `serde(default)`: a default
/// attribute here would put a `Default` bound on `T` and rule out
/// payload types that have none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterResponse<T> {
    /// The primary data
    pub data: Option<T>,

    /// Included expansions
    pub includes: Option<Includes>,

    /// Metadata about the response
    pub meta: Option<ResponseMeta>,

    /// Errors (partial failures)
    pub errors: Option<Vec<ApiErrorDetail>>,
}

/// Included expansions in Twitter API responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Includes {
    /// Expanded user objects
    #[serde(default)]
    pub users: Vec<User>,
}

/// Response metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Number of results
    #[serde(default)]
    pub result_count: Option<u32>,

    /// Token for the next page
    #[serde(default)]
    pub next_token: Option<String>,
}

/// One entry of an API error payload.
///
/// Covers both the v2 shape (`title`/`detail`) and the v1.1 shape
/// (`code`/`message`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub detail: Option<String>,

    #[serde(default)]
    pub code: Option<i32>,

    #[serde(default)]
    pub message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tweets and users
// ─────────────────────────────────────────────────────────────────────────────

/// Twitter tweet object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    /// Tweet ID
    pub id: String,

    /// Tweet text content
    pub text: String,

    /// Author user ID
    #[serde(default)]
    pub author_id: Option<String>,

    /// Tweet creation timestamp (ISO 8601)
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Twitter user object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Username (handle without @)
    pub username: String,
}

/// Create tweet request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTweetRequest {
    /// Tweet text
    pub text: String,
}

/// Create tweet response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTweetResponse {
    /// Created tweet data
    pub data: CreatedTweet,
}

/// Created tweet data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedTweet {
    /// Tweet ID
    pub id: String,

    /// Tweet text
    pub text: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Direct messages
// ─────────────────────────────────────────────────────────────────────────────

/// A direct message event from `/2/dm_events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmEvent {
    /// Event ID
    pub id: String,

    /// Event type (e.g. "MessageCreate")
    #[serde(default)]
    pub event_type: Option<String>,

    /// Message text
    #[serde(default)]
    pub text: Option<String>,

    /// Sender user ID
    #[serde(default)]
    pub sender_id: Option<String>,

    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Send direct message request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendDmRequest {
    /// Message text
    pub text: String,
}

/// Send direct message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendDmResponse {
    /// Created DM event data
    pub data: SentDm,
}

/// Created DM event data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentDm {
    /// Conversation ID
    pub dm_conversation_id: String,

    /// Event ID of the sent message
    pub dm_event_id: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Trends (v1.1)
// ─────────────────────────────────────────────────────────────────────────────

/// One element of the `/1.1/trends/place.json` response array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceTrends {
    /// The trending topics for this place
    pub trends: Vec<Trend>,

    #[serde(default)]
    pub as_of: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    /// The locations the trends apply to
    #[serde(default)]
    pub locations: Vec<TrendLocation>,
}

/// A single trending topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trend {
    /// Topic name
    pub name: String,

    /// Twitter search URL for the topic
    pub url: String,

    /// Query parameter for searching the topic
    #[serde(default)]
    pub query: Option<String>,

    /// Tweet volume over the last 24 hours, when the service reports one
    #[serde(default)]
    pub tweet_volume: Option<i64>,
}

/// An entry of the `/1.1/trends/available.json` location list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendLocation {
    /// Location name (e.g. "Worldwide", "Madrid")
    pub name: String,

    /// The location's WOEID
    pub woeid: i64,

    #[serde(default)]
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // `User` has no `Default` impl, so this instantiation only
    // compiles while the envelope derive puts no `Default` bound on
    // its payload type.
    #[test]
    fn envelope_deserializes_without_default_payloads() {
        let sparse: TwitterResponse<User> = serde_json::from_str("{}").unwrap();
        assert!(sparse.data.is_none());
        assert!(sparse.includes.is_none());
        assert!(sparse.meta.is_none());
        assert!(sparse.errors.is_none());

        let full: TwitterResponse<Vec<Tweet>> = serde_json::from_value(serde_json::json!({
            "data": [{"id": "1", "text": "hi"}],
            "meta": {"result_count": 1}
        }))
        .unwrap();
        assert_eq!(full.data.unwrap().len(), 1);
        assert_eq!(full.meta.unwrap().result_count, Some(1));
    }

    #[test]
    fn dm_event_tolerates_sparse_fields() {
        let event: DmEvent = serde_json::from_value(serde_json::json!({"id": "e1"})).unwrap();
        assert!(event.sender_id.is_none());
        assert!(event.text.is_none());
    }
}
