//! The notification engine: record, retrieve, reconcile, dispatch.

use chrono::Utc;
use quorum_core::notification::NotificationKind;
use quorum_core::types::DbId;
use quorum_db::models::notification::{NewNotification, NotificationView};
use quorum_db::repositories::{NotificationRepo, PostRepo, SubRepo, UserRepo};
use quorum_db::DbPool;

use crate::block::BlockFilter;
use crate::dispatch::{Dispatcher, PushContext};

/// Notifications older than this are eligible for expiry pruning.
const EXPIRY_DAYS: i64 = 30;

/// Arguments for [`NotificationEngine::send`].
#[derive(Debug, Clone)]
pub struct SendNotification {
    pub kind: NotificationKind,
    /// Recipient. Required; a notification always targets someone.
    pub target: DbId,
    /// Originating user, or `None` for a system notification.
    pub sender: Option<DbId>,
    pub sub: Option<DbId>,
    pub post: Option<DbId>,
    pub comment: Option<DbId>,
    pub content: Option<String>,
}

/// Core orchestrator for notification delivery and visibility.
///
/// Safe to share by reference across worker tasks: all state lives in the
/// store, and the dispatcher's transport handles are immutable after
/// startup.
pub struct NotificationEngine {
    pool: DbPool,
    dispatcher: Dispatcher,
}

impl NotificationEngine {
    /// Create an engine over a pool and a configured dispatcher.
    pub fn new(pool: DbPool, dispatcher: Dispatcher) -> Self {
        Self { pool, dispatcher }
    }

    /// Record a notification and fan out delivery.
    ///
    /// The row is persisted unconditionally and its id returned; history
    /// never depends on the delivery outcome. Dispatch is suppressed when
    /// the recipient blocks the sender (without moderator override) — the
    /// record still exists but stays invisible to the recipient via the
    /// retrieval filter.
    ///
    /// # Panics
    ///
    /// Panics if a sender/sub/post id passed by the caller does not
    /// resolve while composing a transport payload. Callers must only pass
    /// ids that exist; a dangling reference is a logic error.
    pub async fn send(&self, msg: SendNotification) -> Result<DbId, sqlx::Error> {
        let id = NotificationRepo::create(
            &self.pool,
            &NewNotification {
                kind: msg.kind.to_string(),
                target_id: msg.target,
                sender_id: msg.sender,
                sub_id: msg.sub,
                post_id: msg.post,
                comment_id: msg.comment,
                content: msg.content.clone(),
            },
        )
        .await?;

        if BlockFilter::is_blocked(&self.pool, msg.sender, msg.target, msg.sub).await? {
            tracing::debug!(
                notification = id,
                recipient = msg.target,
                "Recipient blocks sender, dispatch suppressed"
            );
            return Ok(id);
        }

        let unread = NotificationRepo::unread_count(&self.pool, msg.target).await?;
        self.dispatcher.live_update(msg.target, unread);

        if self.dispatcher.wants_payload() {
            let ctx = self.resolve_context(&msg).await?;
            let email_to = self.forwarding_address(msg.target).await?;
            self.dispatcher
                .deliver(msg.target, &msg.kind, &ctx, unread, email_to.as_deref())
                .await;
        }

        Ok(id)
    }

    /// List one page (50 entries, 1-based) of a user's notifications,
    /// newest first, enriched with related-entity snapshots and the
    /// viewer's vote directions. An out-of-range page is an empty list.
    pub async fn list(&self, uid: DbId, page: i64) -> Result<Vec<NotificationView>, sqlx::Error> {
        NotificationRepo::list_page(&self.pool, uid, page).await
    }

    /// Reconcile read and expiry state for a user.
    ///
    /// When `visible` carries the ids from a fresh first page, every
    /// notification older than 30 days and not among them is permanently
    /// deleted first — bounding history growth without ever removing
    /// something the user can currently see. Then all unread rows get
    /// `read_at` set; the bulk update is idempotent.
    pub async fn mark_read(&self, uid: DbId, visible: Option<&[DbId]>) -> Result<(), sqlx::Error> {
        if let Some(keep) = visible {
            let cutoff = Utc::now() - chrono::Duration::days(EXPIRY_DAYS);
            let pruned = NotificationRepo::prune_expired(&self.pool, uid, cutoff, keep).await?;
            if pruned > 0 {
                tracing::debug!(uid, pruned, "Pruned expired notifications");
            }
        }

        NotificationRepo::mark_all_read(&self.pool, uid).await?;
        Ok(())
    }

    /// The user's current unread count.
    pub async fn unread_count(&self, uid: DbId) -> Result<i64, sqlx::Error> {
        NotificationRepo::unread_count(&self.pool, uid).await
    }

    /// Resolve the display entities referenced by a send into a payload
    /// context. Each lookup is unchecked beyond the store round-trip: an
    /// id that does not resolve panics (see [`send`](Self::send)).
    async fn resolve_context(&self, msg: &SendNotification) -> Result<PushContext, sqlx::Error> {
        let sender_name = match msg.sender {
            Some(id) => Some(
                UserRepo::get(&self.pool, id)
                    .await?
                    .expect("notification sender does not exist")
                    .name,
            ),
            None => None,
        };

        let sub_name = match msg.sub {
            Some(id) => Some(
                SubRepo::get(&self.pool, id)
                    .await?
                    .expect("notification sub does not exist")
                    .name,
            ),
            None => None,
        };

        let post_title = match msg.post {
            Some(id) => Some(
                PostRepo::get(&self.pool, id)
                    .await?
                    .expect("notification post does not exist")
                    .title,
            ),
            None => None,
        };

        Ok(PushContext {
            sender_name,
            sub_name,
            post_title,
        })
    }

    /// The recipient's email address, when the forwarding queue is running
    /// and the recipient has one on file.
    async fn forwarding_address(&self, target: DbId) -> Result<Option<String>, sqlx::Error> {
        if !self.dispatcher.has_email() {
            return Ok(None);
        }
        let user = UserRepo::get(&self.pool, target)
            .await?
            .expect("notification target does not exist");
        Ok(user.email)
    }
}
