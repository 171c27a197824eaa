//! Twitter REST API client.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::{
    config::{RateLimitInfo, TwitterConfig},
    error::{TwitterError, TwitterResult},
    oauth::{encode, OAuthSigner},
    types::{
        ApiErrorDetail, CreateTweetRequest, CreateTweetResponse, DmEvent, PlaceTrends,
        SendDmRequest, SendDmResponse, TrendLocation, Tweet, TwitterResponse, User,
    },
};

const USER_FIELDS: &str = "id,name,username";

/// Twitter REST API client.
///
/// One authenticated handle, constructed once from [`TwitterConfig`]
/// and shared read-only by every action. Holds no per-call mutable
/// state, so concurrent use needs no locking. Each endpoint method
/// performs exactly one round-trip; a failed attempt is terminal.
#[derive(Debug)]
pub struct TwitterApiClient {
    client: Client,
    base_url: String,
    signer: OAuthSigner,
}

impl TwitterApiClient {
    /// Create a new API client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Config`] when a credential field is
    /// empty, or [`TwitterError::Http`] when the HTTP client cannot
    /// be built.
    pub fn new(config: &TwitterConfig) -> TwitterResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            signer: OAuthSigner::new(config),
        })
    }

    /// Make an authenticated GET request with query parameters.
    #[instrument(skip(self, params))]
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> TwitterResult<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let auth_header = self.signer.authorization_header("GET", &url, params)?;

        let full_url = if params.is_empty() {
            url
        } else {
            let query = params
                .iter()
                .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            format!("{url}?{query}")
        };

        debug!(endpoint, "GET Twitter API");
        let response = self
            .client
            .get(&full_url)
            .header("Authorization", auth_header)
            .send()
            .await?;

        handle_response(response).await
    }

    /// Make an authenticated POST request with a JSON body.
    ///
    /// JSON bodies take no part in the OAuth signature; only the
    /// OAuth parameters themselves are signed.
    #[instrument(skip(self, body))]
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> TwitterResult<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let auth_header = self.signer.authorization_header("POST", &url, &[])?;

        debug!(endpoint, "POST Twitter API");
        let response = self
            .client
            .post(&url)
            .header("Authorization", auth_header)
            .json(body)
            .send()
            .await?;

        handle_response(response).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // User endpoints
    // ─────────────────────────────────────────────────────────────────────────

    /// Get the authenticated user.
    pub async fn get_me(&self) -> TwitterResult<TwitterResponse<User>> {
        let params = vec![("user.fields".to_string(), USER_FIELDS.to_string())];
        self.get("/2/users/me", &params).await
    }

    /// Get a user by ID.
    pub async fn get_user(&self, user_id: &str) -> TwitterResult<TwitterResponse<User>> {
        let params = vec![("user.fields".to_string(), USER_FIELDS.to_string())];
        self.get(&format!("/2/users/{user_id}"), &params).await
    }

    /// Get a user by username (with or without a leading @).
    pub async fn get_user_by_username(
        &self,
        username: &str,
    ) -> TwitterResult<TwitterResponse<User>> {
        let username = username.trim_start_matches('@');
        let params = vec![("user.fields".to_string(), USER_FIELDS.to_string())];
        self.get(&format!("/2/users/by/username/{username}"), &params)
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tweet endpoints
    // ─────────────────────────────────────────────────────────────────────────

    /// Search recent tweets, with author expansion.
    pub async fn search_recent(
        &self,
        query: &str,
        max_results: u32,
    ) -> TwitterResult<TwitterResponse<Vec<Tweet>>> {
        let params = vec![
            ("query".to_string(), query.to_string()),
            ("max_results".to_string(), max_results.to_string()),
            (
                "tweet.fields".to_string(),
                "id,text,author_id,created_at".to_string(),
            ),
            ("expansions".to_string(), "author_id".to_string()),
            ("user.fields".to_string(), USER_FIELDS.to_string()),
        ];
        self.get("/2/tweets/search/recent", &params).await
    }

    /// Create a new tweet.
    pub async fn create_tweet(
        &self,
        request: &CreateTweetRequest,
    ) -> TwitterResult<CreateTweetResponse> {
        self.post("/2/tweets", request).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Direct message endpoints
    // ─────────────────────────────────────────────────────────────────────────

    /// List the most recent direct message events.
    pub async fn list_dm_events(
        &self,
        max_results: u32,
    ) -> TwitterResult<TwitterResponse<Vec<DmEvent>>> {
        let params = vec![
            (
                "dm_event.fields".to_string(),
                "id,text,created_at,sender_id,event_type".to_string(),
            ),
            ("event_types".to_string(), "MessageCreate".to_string()),
            ("max_results".to_string(), max_results.to_string()),
        ];
        self.get("/2/dm_events", &params).await
    }

    /// Send a direct message to a user by ID.
    pub async fn send_dm(&self, participant_id: &str, text: &str) -> TwitterResult<SendDmResponse> {
        let body = SendDmRequest {
            text: text.to_string(),
        };
        self.post(
            &format!("/2/dm_conversations/with/{participant_id}/messages"),
            &body,
        )
        .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Trend endpoints (v1.1)
    // ─────────────────────────────────────────────────────────────────────────

    /// Get the trending topics for a WOEID.
    pub async fn get_place_trends(&self, woeid: i64) -> TwitterResult<Vec<PlaceTrends>> {
        let params = vec![("id".to_string(), woeid.to_string())];
        self.get("/1.1/trends/place.json", &params).await
    }

    /// List the locations Twitter has trending topic information for.
    pub async fn get_available_trend_locations(&self) -> TwitterResult<Vec<TrendLocation>> {
        self.get("/1.1/trends/available.json", &[]).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> TwitterResult<T> {
    let status = response.status();

    let rate_limit = RateLimitInfo::from_headers(response.headers());
    if rate_limit.is_exhausted() {
        debug!(reset = ?rate_limit.reset, "rate limit exhausted");
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = rate_limit
            .time_until_reset()
            .map_or(60, |d| d.as_secs());

        return Err(TwitterError::RateLimited { retry_after });
    }

    let bytes = response.bytes().await?;

    if status.is_success() {
        serde_json::from_slice(&bytes).map_err(TwitterError::from)
    } else {
        Err(parse_error_body(status.as_u16(), &bytes))
    }
}

/// Build an [`TwitterError::Api`] from an error body, covering both
/// the v2 (`title`/`detail`) and v1.1 (`errors[]`) shapes.
fn parse_error_body(status: u16, bytes: &[u8]) -> TwitterError {
    #[derive(Default, serde::Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        detail: Option<String>,
        #[serde(default)]
        errors: Option<Vec<ApiErrorDetail>>,
    }

    let body: ErrorBody = serde_json::from_slice(bytes).unwrap_or_default();
    let first = body.errors.as_ref().and_then(|e| e.first());

    let message = body
        .detail
        .or(body.title)
        .or_else(|| first.and_then(|e| e.message.clone().or_else(|| e.detail.clone())))
        .unwrap_or_else(|| String::from_utf8_lossy(bytes).into_owned());

    TwitterError::Api {
        status,
        message,
        error_code: first.and_then(|e| e.code),
    }
}
