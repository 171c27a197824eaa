//! Normalized results handed to the chat-formatting layer.

use serde::Serialize;

/// Fixed color tag applied to every attachment and trend card.
pub const ATTACHMENT_COLOR: &str = "#1da1f2";

/// A uniform display record for rendering a tweet or direct message
/// in a chat surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// "{display name} @{handle}"
    pub author_name: String,

    /// Raw message text
    pub text: String,

    /// Color tag, always [`ATTACHMENT_COLOR`]
    pub color: String,

    /// Creation time in whole seconds since the Unix epoch
    pub ts: i64,
}

impl Attachment {
    #[must_use]
    pub fn new(author_name: String, text: String, ts: i64) -> Self {
        Self {
            author_name,
            text,
            color: ATTACHMENT_COLOR.to_string(),
            ts,
        }
    }
}

/// A display record for one trending topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendCard {
    /// Trend name
    pub title: String,

    /// Twitter search URL for the trend
    pub title_link: String,

    /// "Tweet volume: N", or "Tweet volume: undefined" when the
    /// service reports no volume
    pub volume_text: String,

    /// Color tag, always [`ATTACHMENT_COLOR`]
    pub color: String,
}

impl TrendCard {
    #[must_use]
    pub fn new(title: String, title_link: String, tweet_volume: Option<i64>) -> Self {
        let volume_text = match tweet_volume {
            Some(volume) if volume > 0 => format!("Tweet volume: {volume}"),
            _ => "Tweet volume: undefined".to_string(),
        };

        Self {
            title,
            title_link,
            volume_text,
            color: ATTACHMENT_COLOR.to_string(),
        }
    }
}

/// The outcome of executing an action.
///
/// The legacy boundary contract is preserved as derived views:
/// [`Reply::sentinel`] renders `Empty`/`Failed` as the `"0"`/`"1"`
/// strings the list-producing actions historically returned, and
/// [`Reply::status_code`] renders the integer 0/1 the fire-and-forget
/// actions return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Ordered attachments from a search or DM listing
    Attachments(Vec<Attachment>),

    /// Ordered trend cards
    Trends(Vec<TrendCard>),

    /// A fire-and-forget action completed
    Done,

    /// The remote call succeeded but produced nothing to show
    Empty,

    /// The remote call failed
    Failed,
}

impl Reply {
    /// Non-empty attachments, or [`Reply::Empty`].
    #[must_use]
    pub fn from_attachments(attachments: Vec<Attachment>) -> Self {
        if attachments.is_empty() {
            Self::Empty
        } else {
            Self::Attachments(attachments)
        }
    }

    /// Non-empty trend cards, or [`Reply::Empty`].
    #[must_use]
    pub fn from_trends(trends: Vec<TrendCard>) -> Self {
        if trends.is_empty() {
            Self::Empty
        } else {
            Self::Trends(trends)
        }
    }

    /// The legacy string sentinel: `"0"` for empty, `"1"` for failed,
    /// `None` when there is a payload.
    ///
    /// A payload variant built directly with an empty collection
    /// renders the same as [`Reply::Empty`], so callers that bypass
    /// [`Reply::from_attachments`]/[`Reply::from_trends`] still get a
    /// consistent boundary.
    #[must_use]
    pub fn sentinel(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some("0"),
            Self::Failed => Some("1"),
            Self::Attachments(attachments) if attachments.is_empty() => Some("0"),
            Self::Trends(trends) if trends.is_empty() => Some("0"),
            _ => None,
        }
    }

    /// The legacy integer code for fire-and-forget actions: 1 on
    /// failure, 0 otherwise.
    #[must_use]
    pub const fn status_code(&self) -> i32 {
        match self {
            Self::Failed => 1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_distinguishes_empty_from_failed() {
        assert_eq!(Reply::Empty.sentinel(), Some("0"));
        assert_eq!(Reply::Failed.sentinel(), Some("1"));
        assert_eq!(Reply::Done.sentinel(), None);
    }

    #[test]
    fn directly_built_empty_payloads_render_as_empty() {
        assert_eq!(Reply::Attachments(Vec::new()).sentinel(), Some("0"));
        assert_eq!(Reply::Trends(Vec::new()).sentinel(), Some("0"));

        let attachment = Attachment::new("A @a".into(), "hi".into(), 1);
        assert_eq!(Reply::Attachments(vec![attachment]).sentinel(), None);
    }

    #[test]
    fn status_code_is_one_only_on_failure() {
        assert_eq!(Reply::Done.status_code(), 0);
        assert_eq!(Reply::Empty.status_code(), 0);
        assert_eq!(Reply::Failed.status_code(), 1);
    }

    #[test]
    fn empty_collections_collapse_to_empty() {
        assert_eq!(Reply::from_attachments(vec![]), Reply::Empty);
        assert_eq!(Reply::from_trends(vec![]), Reply::Empty);
    }

    #[test]
    fn attachment_carries_fixed_color() {
        let attachment = Attachment::new("A @a".into(), "hi".into(), 1);
        assert_eq!(attachment.color, ATTACHMENT_COLOR);
    }

    #[test]
    fn trend_volume_text() {
        let with_volume = TrendCard::new("#Rust".into(), "http://x".into(), Some(42));
        assert_eq!(with_volume.volume_text, "Tweet volume: 42");

        let without = TrendCard::new("#Quiet".into(), "http://x".into(), None);
        assert_eq!(without.volume_text, "Tweet volume: undefined");

        let zero = TrendCard::new("#Zero".into(), "http://x".into(), Some(0));
        assert_eq!(zero.volume_text, "Tweet volume: undefined");
    }
}
