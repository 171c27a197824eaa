//! Error types for the Twitter platform.

use thiserror::Error;

/// Errors surfaced by the API client.
///
/// Actions never propagate these to their caller; `execute` logs the
/// error and returns the failure reply instead. The variants exist so
/// the log line (and any direct client user) can tell transport,
/// decoding, and API-level failures apart.
#[derive(Error, Debug)]
pub enum TwitterError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// OAuth signature generation failed
    #[error("OAuth error: {0}")]
    OAuth(String),

    /// Twitter API returned an error response
    #[error("Twitter API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        error_code: Option<i32>,
    },

    /// Rate limited
    #[error("rate limited, retry after {retry_after} seconds")]
    RateLimited { retry_after: u64 },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for Twitter operations.
pub type TwitterResult<T> = Result<T, TwitterError>;

/// A parameter violated its range or non-emptiness constraint.
///
/// Raised at action construction time and always fatal to that
/// construction attempt. Out-of-range values are rejected, never
/// silently clamped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required string parameter was empty
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    /// An integer parameter was outside its allowed range
    #[error("{field} must be in [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },

    /// An integer parameter was expected to be positive
    #[error("{field} must be a positive integer, got {value}")]
    NotPositive { field: &'static str, value: i64 },
}
