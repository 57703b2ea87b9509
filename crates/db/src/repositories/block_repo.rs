//! Repository for the `user_blocks` table.

use quorum_core::types::DbId;
use sqlx::PgPool;

use crate::models::block::UserBlock;

/// Provides block-edge writes and the delivery-time block predicate.
pub struct BlockRepo;

impl BlockRepo {
    /// Insert a directed block edge: `user_id` blocks `target_id`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        target_id: DbId,
    ) -> Result<UserBlock, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO user_blocks (user_id, target_id) \
             VALUES ($1, $2) \
             RETURNING id, user_id, target_id, created_at",
        )
        .bind(user_id)
        .bind(target_id)
        .fetch_one(pool)
        .await
    }

    /// Remove a block edge.
    pub async fn delete(pool: &PgPool, user_id: DbId, target_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_blocks WHERE user_id = $1 AND target_id = $2")
            .bind(user_id)
            .bind(target_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether delivery from `sender` to `target` must be suppressed.
    ///
    /// True iff `target` blocks `sender` and neither party holds active
    /// (non-invite) moderator status on `sub`. A missing block row is the
    /// normal not-blocked result, not an error. With `sub = None` the
    /// moderator override cannot apply and the block edge alone decides.
    pub async fn is_blocked(
        pool: &PgPool,
        sender: DbId,
        target: DbId,
        sub: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS ( \
                SELECT 1 FROM user_blocks b \
                WHERE b.user_id = $1 \
                  AND b.target_id = $2 \
                  AND NOT EXISTS ( \
                      SELECT 1 FROM sub_mods m \
                      WHERE m.user_id = $2 AND m.sub_id = $3 AND NOT m.is_invite \
                  ) \
                  AND NOT EXISTS ( \
                      SELECT 1 FROM sub_mods m \
                      WHERE m.user_id = $1 AND m.sub_id = $3 AND NOT m.is_invite \
                  ) \
             )",
        )
        .bind(target)
        .bind(sender)
        .bind(sub)
        .fetch_one(pool)
        .await
    }
}
