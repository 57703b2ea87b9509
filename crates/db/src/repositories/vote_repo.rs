//! Repository for the `post_votes` and `comment_votes` tables.

use quorum_core::types::DbId;
use sqlx::PgPool;

/// Provides vote upserts for posts and comments.
///
/// The notification engine only reads votes (to annotate listings with the
/// viewer's vote direction); these upserts exist for the surrounding
/// application and for tests.
pub struct VoteRepo;

impl VoteRepo {
    /// Record or update a user's vote on a post.
    pub async fn vote_post(
        pool: &PgPool,
        user_id: DbId,
        post_id: DbId,
        positive: bool,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO post_votes (user_id, post_id, positive) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_post_votes_user_post \
             DO UPDATE SET positive = EXCLUDED.positive",
        )
        .bind(user_id)
        .bind(post_id)
        .bind(positive)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Record or update a user's vote on a comment.
    pub async fn vote_comment(
        pool: &PgPool,
        user_id: DbId,
        comment_id: DbId,
        positive: bool,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO comment_votes (user_id, comment_id, positive) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_comment_votes_user_comment \
             DO UPDATE SET positive = EXCLUDED.positive",
        )
        .bind(user_id)
        .bind(comment_id)
        .bind(positive)
        .execute(pool)
        .await?;
        Ok(())
    }
}
