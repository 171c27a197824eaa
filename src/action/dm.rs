//! Direct message actions.

use tracing::{debug, warn};

use crate::action::{epoch_seconds, require_in_range, require_non_empty};
use crate::client::TwitterApiClient;
use crate::error::ValidationError;
use crate::reply::{Attachment, Reply};

/// The default number of direct messages to return per page.
pub const DEFAULT_MESSAGES_PER_PAGE: u32 = 20;

/// The maximum number of direct messages this action can return per
/// page.
pub const MAX_MESSAGES_PER_PAGE: u32 = 50;

/// Sends a direct message to a user by screen name.
#[derive(Debug, Clone)]
pub struct SendDirectMessage {
    recipient: String,
    text: String,
}

impl SendDirectMessage {
    /// # Errors
    ///
    /// Fails when `recipient` or `text` is empty.
    pub fn new(
        recipient: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let recipient = recipient.into();
        let text = text.into();
        require_non_empty("recipient", &recipient)?;
        require_non_empty("text", &text)?;

        Ok(Self { recipient, text })
    }

    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Resolve the recipient's screen name to a user id, then send.
    /// Fire-and-forget: renders as integer 0 on success, 1 on remote
    /// failure.
    pub async fn execute(&self, client: &TwitterApiClient) -> Reply {
        let user = match client.get_user_by_username(&self.recipient).await {
            Ok(response) => match response.data {
                Some(user) => user,
                None => {
                    warn!(recipient = %self.recipient, "DM recipient not found");
                    return Reply::Failed;
                }
            },
            Err(error) => {
                warn!(%error, recipient = %self.recipient, "failed to resolve DM recipient");
                return Reply::Failed;
            }
        };

        match client.send_dm(&user.id, &self.text).await {
            Ok(response) => {
                debug!(event_id = %response.data.dm_event_id, "direct message sent");
                Reply::Done
            }
            Err(error) => {
                warn!(%error, recipient = %self.recipient, "failed to send direct message");
                Reply::Failed
            }
        }
    }
}

/// Lists the most recent incoming direct messages as [`Attachment`]s.
///
/// Messages sent by the authenticated account itself are excluded, so
/// only inbound messages are shown. The listing endpoint does not
/// expand sender profiles, so every listed message costs one extra
/// user lookup.
#[derive(Debug, Clone)]
pub struct ListDirectMessages {
    messages_per_page: u32,
}

impl ListDirectMessages {
    /// List with the default page size.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages_per_page: DEFAULT_MESSAGES_PER_PAGE,
        }
    }

    /// List with an explicit page size in
    /// `[1, MAX_MESSAGES_PER_PAGE]`.
    ///
    /// # Errors
    ///
    /// Fails when `messages_per_page` is out of range.
    pub fn with_page_size(messages_per_page: u32) -> Result<Self, ValidationError> {
        require_in_range(
            "messages_per_page",
            messages_per_page,
            1,
            MAX_MESSAGES_PER_PAGE,
        )?;

        Ok(Self { messages_per_page })
    }

    #[must_use]
    pub const fn messages_per_page(&self) -> u32 {
        self.messages_per_page
    }

    pub async fn execute(&self, client: &TwitterApiClient) -> Reply {
        let me = match client.get_me().await {
            Ok(response) => match response.data {
                Some(user) => user,
                None => {
                    warn!("authenticated user missing from response");
                    return Reply::Failed;
                }
            },
            Err(error) => {
                warn!(%error, "failed to resolve own account");
                return Reply::Failed;
            }
        };

        let events = match client.list_dm_events(self.messages_per_page).await {
            Ok(response) => response.data.unwrap_or_default(),
            Err(error) => {
                warn!(%error, "failed to list direct messages");
                return Reply::Failed;
            }
        };

        let mut attachments = Vec::new();
        for event in events {
            let Some(sender_id) = event.sender_id.as_deref() else {
                continue;
            };

            // An unresolvable sender aborts the whole listing, whether
            // the lookup errored or came back without a user.
            let sender = match client.get_user(sender_id).await {
                Ok(response) => match response.data {
                    Some(user) => user,
                    None => {
                        warn!(sender_id, "DM sender missing from response");
                        return Reply::Failed;
                    }
                },
                Err(error) => {
                    warn!(%error, sender_id, "failed to resolve DM sender");
                    return Reply::Failed;
                }
            };

            // Self-filter: only inbound messages are shown.
            if sender.username == me.username {
                continue;
            }

            attachments.push(Attachment::new(
                format!("{} @{}", sender.name, sender.username),
                event.text.clone().unwrap_or_default(),
                epoch_seconds(event.created_at.as_deref()),
            ));
        }

        Reply::from_attachments(attachments)
    }
}

impl Default for ListDirectMessages {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::test_client;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    async fn mount_me(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/2/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"id": "1", "name": "Me", "username": "me_user"}
            })))
            .mount(server)
            .await;
    }

    #[test]
    fn send_requires_recipient_and_text() {
        assert_eq!(
            SendDirectMessage::new("", "hi").unwrap_err(),
            ValidationError::Empty { field: "recipient" }
        );
        assert_eq!(
            SendDirectMessage::new("bob", "").unwrap_err(),
            ValidationError::Empty { field: "text" }
        );
        assert!(SendDirectMessage::new("bob", "hi").is_ok());
    }

    #[test]
    fn list_page_size_bounds_are_enforced() {
        assert!(ListDirectMessages::with_page_size(0).is_err());
        assert!(ListDirectMessages::with_page_size(51).is_err());
        assert!(ListDirectMessages::with_page_size(1).is_ok());
        assert!(ListDirectMessages::with_page_size(50).is_ok());
        assert_eq!(
            ListDirectMessages::new().messages_per_page(),
            DEFAULT_MESSAGES_PER_PAGE
        );
    }

    #[tokio::test]
    async fn send_failure_yields_code_one() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2/users/by/username/bob"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"id": "99", "name": "Bob", "username": "bob"}
            })))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/2/dm_conversations/with/99/messages"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = SendDirectMessage::new("bob", "hi")
            .unwrap()
            .execute(&client)
            .await;

        assert_eq!(reply, Reply::Failed);
        assert_eq!(reply.status_code(), 1);
    }

    #[tokio::test]
    async fn send_succeeds_with_code_zero() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2/users/by/username/bob"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"id": "99", "name": "Bob", "username": "bob"}
            })))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/2/dm_conversations/with/99/messages"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": {"dm_conversation_id": "1-99", "dm_event_id": "555"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = SendDirectMessage::new("@bob", "hi")
            .unwrap()
            .execute(&client)
            .await;

        assert_eq!(reply, Reply::Done);
        assert_eq!(reply.status_code(), 0);
    }

    #[tokio::test]
    async fn own_messages_are_filtered_out() {
        let server = MockServer::start().await;
        mount_me(&server).await;

        Mock::given(method("GET"))
            .and(path("/2/dm_events"))
            .and(query_param("max_results", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {"id": "e1", "event_type": "MessageCreate", "text": "hi there",
                     "sender_id": "2", "created_at": "2023-06-01T10:00:00.000Z"},
                    {"id": "e2", "event_type": "MessageCreate", "text": "my own reply",
                     "sender_id": "1", "created_at": "2023-06-01T10:01:00.000Z"}
                ],
                "meta": {"result_count": 2}
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/2/users/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"id": "1", "name": "Me", "username": "me_user"}
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/2/users/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"id": "2", "name": "Bob", "username": "bob"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = ListDirectMessages::new().execute(&client).await;

        let Reply::Attachments(attachments) = reply else {
            panic!("expected attachments, got {reply:?}");
        };
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].author_name, "Bob @bob");
        assert_eq!(attachments[0].text, "hi there");
    }

    #[tokio::test]
    async fn no_messages_yield_empty_sentinel() {
        let server = MockServer::start().await;
        mount_me(&server).await;

        Mock::given(method("GET"))
            .and(path("/2/dm_events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "meta": {"result_count": 0}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = ListDirectMessages::new().execute(&client).await;

        assert_eq!(reply, Reply::Empty);
        assert_eq!(reply.sentinel(), Some("0"));
    }

    #[tokio::test]
    async fn unresolvable_sender_fails_the_listing() {
        let server = MockServer::start().await;
        mount_me(&server).await;

        Mock::given(method("GET"))
            .and(path("/2/dm_events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {"id": "e1", "event_type": "MessageCreate", "text": "hi there",
                     "sender_id": "404", "created_at": "2023-06-01T10:00:00.000Z"}
                ],
                "meta": {"result_count": 1}
            })))
            .mount(&server)
            .await;

        // 200 with no user object, like the lookup of a suspended
        // account.
        Mock::given(method("GET"))
            .and(path("/2/users/404"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "errors": [{"title": "Not Found Error"}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = ListDirectMessages::new().execute(&client).await;

        assert_eq!(reply, Reply::Failed);
        assert_eq!(reply.sentinel(), Some("1"));
    }

    #[tokio::test]
    async fn listing_failure_yields_failure_sentinel() {
        let server = MockServer::start().await;
        mount_me(&server).await;

        Mock::given(method("GET"))
            .and(path("/2/dm_events"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = ListDirectMessages::new().execute(&client).await;

        assert_eq!(reply, Reply::Failed);
        assert_eq!(reply.sentinel(), Some("1"));
    }
}
