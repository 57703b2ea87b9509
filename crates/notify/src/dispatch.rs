//! Multi-channel dispatch: payload composition and transport fan-out.
//!
//! [`Dispatcher`] owns the three external senders — live socket, push,
//! email queue — and composes the channel payloads for a notification
//! that survived block filtering. Transports are injected at construction
//! so tests can swap in recording implementations; failures are logged
//! and swallowed, never rolled back against the persisted row.

use std::sync::Arc;

use quorum_core::notification::NotificationKind;
use quorum_core::types::DbId;
use quorum_events::push::{HttpPush, PushMessage, PushTransport};
use quorum_events::queue::{EmailJob, EmailQueue};
use quorum_events::socket::{user_channel, SocketBus, EVENT_NOTIFICATION};
use quorum_events::{EmailConfig, EmailDelivery};
use tokio_util::sync::CancellationToken;

use crate::config::NotifyConfig;
use crate::i18n::translate;

// ---------------------------------------------------------------------------
// Copy templates
// ---------------------------------------------------------------------------

const TITLE_POST_REPLY: &str = "Post reply in %(prefix)s/%(sub)s";
const BODY_POST_REPLY: &str = "%(name)s replied to your post titled %(title)s";

const TITLE_COMMENT_REPLY: &str = "Comment reply in %(prefix)s/%(sub)s";
const BODY_COMMENT_REPLY: &str = "%(name)s replied to your comment in the post titled %(title)s";

const TITLE_MENTION: &str = "You were mentioned in %(prefix)s/%(sub)s";
const BODY_MENTION: &str = "%(name)s mentioned you in the post titled %(title)s";

/// Generic copy for kinds without dedicated templates. New notification
/// kinds degrade to this until copy is added for them.
const TITLE_FALLBACK: &str = "New notification.";
const BODY_FALLBACK: &str = "You have a new notification.";

// ---------------------------------------------------------------------------
// PushContext
// ---------------------------------------------------------------------------

/// Display entities resolved for payload composition.
///
/// Fields are `None` only when the notification carries no corresponding
/// id; a recognized reply/mention kind implies all three are present.
#[derive(Debug, Default, Clone)]
pub struct PushContext {
    pub sender_name: Option<String>,
    pub sub_name: Option<String>,
    pub post_title: Option<String>,
}

/// Compose the per-kind title and body for a dispatch payload.
///
/// Exhaustive over the recognized kinds with a generic default arm, so an
/// unrecognized kind never fails. For the recognized kinds the context
/// entities must be present — the send arguments imply they exist, and a
/// dangling reference here is a logic error, not a delivery problem.
pub fn compose(kind: &NotificationKind, sub_prefix: &str, ctx: &PushContext) -> (String, String) {
    let require = |field: &Option<String>, what: &str| -> String {
        field
            .clone()
            .unwrap_or_else(|| panic!("{} notification is missing its {what}", kind.as_str()))
    };

    match kind {
        NotificationKind::PostReply => (
            translate(
                TITLE_POST_REPLY,
                &[("prefix", sub_prefix), ("sub", &require(&ctx.sub_name, "sub"))],
            ),
            translate(
                BODY_POST_REPLY,
                &[
                    ("name", &require(&ctx.sender_name, "sender")),
                    ("title", &require(&ctx.post_title, "post")),
                ],
            ),
        ),
        NotificationKind::CommentReply => (
            translate(
                TITLE_COMMENT_REPLY,
                &[("prefix", sub_prefix), ("sub", &require(&ctx.sub_name, "sub"))],
            ),
            translate(
                BODY_COMMENT_REPLY,
                &[
                    ("name", &require(&ctx.sender_name, "sender")),
                    ("title", &require(&ctx.post_title, "post")),
                ],
            ),
        ),
        NotificationKind::PostMention | NotificationKind::CommentMention => (
            translate(
                TITLE_MENTION,
                &[("prefix", sub_prefix), ("sub", &require(&ctx.sub_name, "sub"))],
            ),
            translate(
                BODY_MENTION,
                &[
                    ("name", &require(&ctx.sender_name, "sender")),
                    ("title", &require(&ctx.post_title, "post")),
                ],
            ),
        ),
        NotificationKind::Other(_) => (
            translate(TITLE_FALLBACK, &[]),
            translate(BODY_FALLBACK, &[]),
        ),
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Fans a sent notification out to the configured transports.
pub struct Dispatcher {
    socket: Arc<SocketBus>,
    push: Option<Arc<dyn PushTransport>>,
    email: Option<EmailQueue>,
    config: NotifyConfig,
}

impl Dispatcher {
    /// Build a dispatcher with explicit transports.
    pub fn new(
        socket: Arc<SocketBus>,
        push: Option<Arc<dyn PushTransport>>,
        email: Option<EmailQueue>,
        config: NotifyConfig,
    ) -> Self {
        Self {
            socket,
            push,
            email,
            config,
        }
    }

    /// Build the production transports from configuration, once at startup.
    ///
    /// Push is constructed only when an API key is configured; the email
    /// queue worker is spawned only when the site flag is set and SMTP is
    /// configured in the environment.
    pub fn from_config(
        config: NotifyConfig,
        socket: Arc<SocketBus>,
        cancel: &CancellationToken,
    ) -> Self {
        let push: Option<Arc<dyn PushTransport>> = config
            .push_api_key
            .as_ref()
            .map(|key| Arc::new(HttpPush::new(&config.push_endpoint, key)) as Arc<dyn PushTransport>);

        let email = if config.email_forwarding {
            match EmailConfig::from_env() {
                Some(smtp) => Some(EmailQueue::start(
                    EmailDelivery::new(smtp),
                    cancel.child_token(),
                )),
                None => {
                    tracing::warn!("Email forwarding enabled but SMTP is not configured");
                    None
                }
            }
        } else {
            None
        };

        Self::new(socket, push, email, config)
    }

    /// Whether any transport beyond the live socket needs a composed
    /// payload (and therefore resolved display entities).
    pub fn wants_payload(&self) -> bool {
        self.push.is_some() || self.email.is_some()
    }

    /// Whether the email-forwarding queue is running.
    pub fn has_email(&self) -> bool {
        self.email.is_some()
    }

    /// Publish the recipient's new unread count on their socket channel.
    pub fn live_update(&self, target: DbId, unread_count: i64) {
        self.socket.publish(
            user_channel(target),
            EVENT_NOTIFICATION,
            serde_json::json!({ "count": unread_count }),
        );
    }

    /// Compose the payload and invoke the push and email transports.
    ///
    /// Transport failures are logged and dropped; the request timeout on
    /// the push client bounds how long a send can stall the caller.
    pub async fn deliver(
        &self,
        target: DbId,
        kind: &NotificationKind,
        ctx: &PushContext,
        unread_count: i64,
        email_to: Option<&str>,
    ) {
        let (title, body) = compose(kind, &self.config.sub_prefix, ctx);

        if let Some(push) = &self.push {
            let message = PushMessage {
                title: title.clone(),
                body: body.clone(),
                badge: self.config.site_icon_url.clone(),
                unread_count,
            };
            if let Err(e) = push.send_topic_message(&target.to_string(), &message).await {
                tracing::error!(recipient = target, error = %e, "Push delivery failed, dropping");
            }
        }

        if let (Some(queue), Some(to)) = (&self.email, email_to) {
            queue.enqueue(EmailJob {
                to: to.to_string(),
                subject: title,
                body,
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn full_context() -> PushContext {
        PushContext {
            sender_name: Some("alice".to_string()),
            sub_name: Some("rust".to_string()),
            post_title: Some("Borrow checker tips".to_string()),
        }
    }

    #[test]
    fn post_reply_copy() {
        let (title, body) = compose(&NotificationKind::PostReply, "s", &full_context());
        assert_eq!(title, "Post reply in s/rust");
        assert_eq!(body, "alice replied to your post titled Borrow checker tips");
    }

    #[test]
    fn comment_reply_copy() {
        let (title, body) = compose(&NotificationKind::CommentReply, "s", &full_context());
        assert_eq!(title, "Comment reply in s/rust");
        assert_eq!(
            body,
            "alice replied to your comment in the post titled Borrow checker tips"
        );
    }

    #[test]
    fn mention_kinds_share_copy() {
        let post = compose(&NotificationKind::PostMention, "s", &full_context());
        let comment = compose(&NotificationKind::CommentMention, "s", &full_context());
        assert_eq!(post, comment);
        assert_eq!(post.0, "You were mentioned in s/rust");
        assert_eq!(post.1, "alice mentioned you in the post titled Borrow checker tips");
    }

    #[test]
    fn unrecognized_kind_gets_generic_copy() {
        let (title, body) = compose(
            &NotificationKind::Other("SUB_BANNED".to_string()),
            "s",
            &PushContext::default(),
        );
        assert_eq!(title, TITLE_FALLBACK);
        assert_eq!(body, BODY_FALLBACK);
    }

    #[test]
    #[should_panic(expected = "missing its sub")]
    fn recognized_kind_with_dangling_sub_panics() {
        let ctx = PushContext {
            sub_name: None,
            ..full_context()
        };
        compose(&NotificationKind::PostReply, "s", &ctx);
    }

    fn bare_config() -> NotifyConfig {
        NotifyConfig {
            push_api_key: None,
            push_endpoint: quorum_events::push::DEFAULT_ENDPOINT.to_string(),
            email_forwarding: false,
            sub_prefix: "s".to_string(),
            site_icon_url: "/static/icon.png".to_string(),
        }
    }

    #[test]
    fn from_config_without_push_or_email_wants_no_payload() {
        let dispatcher = Dispatcher::from_config(
            bare_config(),
            Arc::new(SocketBus::default()),
            &CancellationToken::new(),
        );
        assert!(!dispatcher.wants_payload());
        assert!(!dispatcher.has_email());
    }

    #[test]
    fn from_config_with_api_key_builds_push_transport() {
        let config = NotifyConfig {
            push_api_key: Some("test-key".to_string()),
            ..bare_config()
        };
        let dispatcher = Dispatcher::from_config(
            config,
            Arc::new(SocketBus::default()),
            &CancellationToken::new(),
        );
        assert!(dispatcher.wants_payload());
        assert!(!dispatcher.has_email());
    }
}
