//! Platform configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{TwitterError, TwitterResult};

/// Configuration for the Twitter platform.
///
/// The four OAuth 1.0a credential strings are supplied once at
/// startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterConfig {
    /// OAuth 1.0a Consumer Key (API Key)
    pub consumer_key: String,

    /// OAuth 1.0a Consumer Secret (API Secret)
    pub consumer_secret: String,

    /// OAuth 1.0a Access Token
    pub access_token: String,

    /// OAuth 1.0a Access Token Secret
    pub access_token_secret: String,

    /// Base URL for the Twitter API (default: https://api.twitter.com)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "duration_secs")]
    pub timeout: Duration,
}

fn default_api_url() -> String {
    "https://api.twitter.com".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl TwitterConfig {
    /// Load the credentials from `TWITTER_CONSUMER_KEY`,
    /// `TWITTER_CONSUMER_SECRET`, `TWITTER_ACCESS_TOKEN` and
    /// `TWITTER_ACCESS_TOKEN_SECRET`.
    pub fn from_env() -> TwitterResult<Self> {
        Ok(Self {
            consumer_key: require_env("TWITTER_CONSUMER_KEY")?,
            consumer_secret: require_env("TWITTER_CONSUMER_SECRET")?,
            access_token: require_env("TWITTER_ACCESS_TOKEN")?,
            access_token_secret: require_env("TWITTER_ACCESS_TOKEN_SECRET")?,
            api_url: default_api_url(),
            timeout: default_timeout(),
        })
    }

    /// Check that every credential field is present.
    pub fn validate(&self) -> TwitterResult<()> {
        for (name, value) in [
            ("consumer_key", &self.consumer_key),
            ("consumer_secret", &self.consumer_secret),
            ("access_token", &self.access_token),
            ("access_token_secret", &self.access_token_secret),
        ] {
            if value.is_empty() {
                return Err(TwitterError::Config(format!("{name} is required")));
            }
        }
        Ok(())
    }
}

fn require_env(name: &str) -> TwitterResult<String> {
    std::env::var(name).map_err(|_| TwitterError::Config(format!("{name} is not set")))
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            consumer_key: String::new(),
            consumer_secret: String::new(),
            access_token: String::new(),
            access_token_secret: String::new(),
            api_url: default_api_url(),
            timeout: default_timeout(),
        }
    }
}

/// Rate limit information from Twitter API headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimitInfo {
    /// Maximum number of requests allowed in the window
    pub limit: Option<u32>,

    /// Remaining requests in the current window
    pub remaining: Option<u32>,

    /// Unix timestamp when the rate limit resets
    pub reset: Option<u64>,
}

impl RateLimitInfo {
    /// Parse rate limit info from response headers.
    pub fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        Self {
            limit: headers
                .get("x-rate-limit-limit")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok()),
            remaining: headers
                .get("x-rate-limit-remaining")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok()),
            reset: headers
                .get("x-rate-limit-reset")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Check if the current window is exhausted.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }

    /// Get the duration until the rate limit resets.
    #[must_use]
    pub fn time_until_reset(&self) -> Option<Duration> {
        let reset = self.reset?;
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .ok()?
            .as_secs();

        if reset > now {
            Some(Duration::from_secs(reset - now))
        } else {
            None
        }
    }
}
