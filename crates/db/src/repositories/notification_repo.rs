//! Repository for the `notifications` table.

use std::collections::HashMap;

use quorum_core::notification::BLOCKABLE_KINDS;
use quorum_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::notification::{
    NewNotification, Notification, NotificationView, NotificationVotes,
};

/// Fixed page size for notification listings.
pub const PAGE_SIZE: i64 = 50;

/// Main listing query.
///
/// One wide set of LEFT JOINs enriches each row with snapshots of the
/// related sub, post, comment, parent comment, and sender, plus the
/// viewer's view receipt. The WHERE clause excludes rows whose related
/// comment is soft-deleted, and rows from blocked senders unless the kind
/// is not blockable or either party is an active moderator of the row's
/// sub.
const LIST_QUERY: &str = "\
    SELECT \
        n.id, n.kind, n.read_at, n.created_at, n.content, \
        n.sender_id, u.name AS sender_name, \
        n.sub_id, s.name AS sub_name, s.nsfw AS sub_nsfw, \
        n.post_id, p.title AS post_title, p.link AS post_link, \
        p.content AS post_content, p.score AS post_score, \
        p.nsfw AS post_nsfw, p.posted AS post_posted, \
        n.comment_id, c.content AS comment_content, c.score AS comment_score, \
        (cv.id IS NOT NULL) AS already_viewed, \
        pc.id AS parent_comment_id, pc.content AS parent_comment_content, \
        pc.score AS parent_comment_score, pc.posted AS parent_comment_posted \
    FROM notifications n \
    LEFT JOIN subs s ON s.id = n.sub_id \
    LEFT JOIN posts p ON p.id = n.post_id \
    LEFT JOIN comments c ON c.id = n.comment_id \
    LEFT JOIN comments pc ON pc.id = c.parent_id \
    LEFT JOIN comment_views cv ON cv.comment_id = n.comment_id AND cv.user_id = $1 \
    LEFT JOIN users u ON u.id = n.sender_id \
    LEFT JOIN user_blocks b ON b.user_id = $1 AND b.target_id = n.sender_id \
    LEFT JOIN sub_mods sm ON sm.user_id = n.sender_id AND sm.sub_id = n.sub_id AND NOT sm.is_invite \
    LEFT JOIN sub_mods vm ON vm.user_id = $1 AND vm.sub_id = n.sub_id AND NOT vm.is_invite \
    WHERE n.target_id = $1 \
      AND c.status IS NULL \
      AND (b.id IS NULL \
           OR NOT (n.kind = ANY($4)) \
           OR sm.id IS NOT NULL \
           OR vm.id IS NOT NULL) \
    ORDER BY n.created_at DESC \
    LIMIT $2 OFFSET $3";

/// Vote lookup for a page of already-selected notification ids.
const VOTES_QUERY: &str = "\
    SELECT \
        n.id, \
        pv.positive AS post_positive, \
        cv.positive AS comment_positive \
    FROM notifications n \
    LEFT JOIN post_votes pv ON pv.user_id = $1 AND pv.post_id = n.post_id \
    LEFT JOIN comment_votes cv ON cv.user_id = $1 AND cv.comment_id = n.comment_id \
    WHERE n.id = ANY($2)";

/// Provides CRUD operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a notification, returning the generated ID.
    ///
    /// The row is stored unconditionally; delivery suppression happens
    /// after the fact and never removes history.
    pub async fn create(pool: &PgPool, input: &NewNotification) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO notifications \
                (kind, target_id, sender_id, sub_id, post_id, comment_id, content) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id",
        )
        .bind(&input.kind)
        .bind(input.target_id)
        .bind(input.sender_id)
        .bind(input.sub_id)
        .bind(input.post_id)
        .bind(input.comment_id)
        .bind(&input.content)
        .fetch_one(pool)
        .await
    }

    /// List one page of a user's notifications, newest first, enriched.
    ///
    /// `page` is 1-based; an out-of-range page yields an empty list.
    ///
    /// The viewer's vote directions are fetched with a second query
    /// restricted to exactly the ids already selected and merged in-memory
    /// by notification id. Joining the vote tables into the main query made
    /// the Postgres planner do a lot of extra work for users with many
    /// notifications and votes.
    pub async fn list_page(
        pool: &PgPool,
        uid: DbId,
        page: i64,
    ) -> Result<Vec<NotificationView>, sqlx::Error> {
        let offset = (page.max(1) - 1) * PAGE_SIZE;
        let blockable: Vec<String> = BLOCKABLE_KINDS.iter().map(|k| k.to_string()).collect();

        let mut views = sqlx::query_as::<_, NotificationView>(LIST_QUERY)
            .bind(uid)
            .bind(PAGE_SIZE)
            .bind(offset)
            .bind(&blockable)
            .fetch_all(pool)
            .await?;

        if views.is_empty() {
            return Ok(views);
        }

        let ids: Vec<DbId> = views.iter().map(|v| v.id).collect();
        let votes = sqlx::query_as::<_, NotificationVotes>(VOTES_QUERY)
            .bind(uid)
            .bind(&ids)
            .fetch_all(pool)
            .await?;

        let votes_by_id: HashMap<DbId, NotificationVotes> =
            votes.into_iter().map(|v| (v.id, v)).collect();
        for view in &mut views {
            if let Some(v) = votes_by_id.get(&view.id) {
                view.post_positive = v.post_positive;
                view.comment_positive = v.comment_positive;
            }
        }

        Ok(views)
    }

    /// Get the number of unread notifications for a user.
    pub async fn unread_count(pool: &PgPool, uid: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE target_id = $1 AND read_at IS NULL",
        )
        .bind(uid)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// Mark all unread notifications as read for a user.
    ///
    /// Bulk and idempotent: rows already read are untouched, so a second
    /// call affects nothing. Returns the number of rows marked.
    pub async fn mark_all_read(pool: &PgPool, uid: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications \
             SET read_at = NOW() \
             WHERE target_id = $1 AND read_at IS NULL",
        )
        .bind(uid)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a user's notifications created before `cutoff`, keeping any
    /// whose id appears in `keep`.
    ///
    /// `keep` is the caller's currently visible first page, so pruning
    /// never makes a visible item vanish mid-session. Returns the number
    /// of rows deleted.
    pub async fn prune_expired(
        pool: &PgPool,
        uid: DbId,
        cutoff: Timestamp,
        keep: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM notifications \
             WHERE target_id = $1 \
               AND created_at < $2 \
               AND NOT (id = ANY($3))",
        )
        .bind(uid)
        .bind(cutoff)
        .bind(keep)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Fetch the raw row for a notification id, bypassing visibility
    /// filtering. History is authoritative regardless of delivery outcome.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<Notification>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, kind, target_id, sender_id, sub_id, post_id, comment_id, \
                    content, read_at, created_at \
             FROM notifications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
