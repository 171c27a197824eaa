//! Twitter platform adapter for conversational agent runtimes.
//!
//! Exposes a small set of Twitter operations as validated, executable
//! actions. Each action holds an immutable, range-checked request and
//! performs one logical remote operation when executed, normalizing
//! the response into uniform attachment/card records for a chat
//! surface.
//!
//! ## Actions
//!
//! - [`SearchTweets`] - search recent tweets, up to 100 per page
//! - [`PostTweet`] - post a tweet (fire-and-forget)
//! - [`SendDirectMessage`] - send a DM to a screen name
//! - [`ListDirectMessages`] - list incoming DMs, excluding the
//!   account's own messages
//! - [`GetTrends`] - trending topics for a WOEID or a place name
//!
//! Remote failures never escape an action: `execute` converts them
//! into [`Reply::Failed`], which renders as the legacy `"1"` sentinel
//! (or integer `1` for the fire-and-forget actions). An empty result
//! is [`Reply::Empty`] (`"0"`), distinct from failure.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
mod client;
mod config;
mod error;
mod oauth;
mod platform;
mod reply;
pub mod types;

#[cfg(test)]
mod testutil;

pub use action::{
    ActionRequest, GetTrends, ListDirectMessages, PostTweet, SearchTweets, SendDirectMessage,
};
pub use client::TwitterApiClient;
pub use config::TwitterConfig;
pub use error::{TwitterError, TwitterResult, ValidationError};
pub use platform::TwitterPlatform;
pub use reply::{Attachment, Reply, TrendCard, ATTACHMENT_COLOR};
