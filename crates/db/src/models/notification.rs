//! Notification entity models and DTOs.

use quorum_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notifications` table.
///
/// Immutable after insert except for the single `read_at` transition from
/// `None` to a timestamp. A `None` sender marks a system notification.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub kind: String,
    pub target_id: DbId,
    pub sender_id: Option<DbId>,
    pub sub_id: Option<DbId>,
    pub post_id: Option<DbId>,
    pub comment_id: Option<DbId>,
    pub content: Option<String>,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for inserting a notification.
#[derive(Debug, Clone, Deserialize)]
pub struct NewNotification {
    pub kind: String,
    pub target_id: DbId,
    pub sender_id: Option<DbId>,
    pub sub_id: Option<DbId>,
    pub post_id: Option<DbId>,
    pub comment_id: Option<DbId>,
    pub content: Option<String>,
}

/// One page entry of a user's notification listing, enriched with
/// denormalized snapshots of the related sub, post, comment, and parent
/// comment at read time.
///
/// `post_positive` and `comment_positive` are not produced by the main
/// listing query; they are merged in afterwards from the narrower vote
/// query (see `NotificationRepo::list_page`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotificationView {
    pub id: DbId,
    pub kind: String,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub content: Option<String>,

    pub sender_id: Option<DbId>,
    pub sender_name: Option<String>,

    pub sub_id: Option<DbId>,
    pub sub_name: Option<String>,
    pub sub_nsfw: Option<bool>,

    pub post_id: Option<DbId>,
    pub post_title: Option<String>,
    pub post_link: Option<String>,
    pub post_content: Option<String>,
    pub post_score: Option<i32>,
    pub post_nsfw: Option<bool>,
    pub post_posted: Option<Timestamp>,

    pub comment_id: Option<DbId>,
    pub comment_content: Option<String>,
    pub comment_score: Option<i32>,
    /// Whether the viewer holds a view receipt for the related comment.
    pub already_viewed: bool,

    /// One level of context when the related comment is a reply.
    pub parent_comment_id: Option<DbId>,
    pub parent_comment_content: Option<String>,
    pub parent_comment_score: Option<i32>,
    pub parent_comment_posted: Option<Timestamp>,

    /// The viewer's vote direction on the related post, if any.
    #[sqlx(default)]
    pub post_positive: Option<bool>,
    /// The viewer's vote direction on the related comment, if any.
    #[sqlx(default)]
    pub comment_positive: Option<bool>,
}

/// Vote directions for one notification id, from the narrow second query.
#[derive(Debug, Clone, FromRow)]
pub struct NotificationVotes {
    pub id: DbId,
    pub post_positive: Option<bool>,
    pub comment_positive: Option<bool>,
}
