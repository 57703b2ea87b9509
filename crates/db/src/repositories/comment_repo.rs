//! Repository for the `comments` and `comment_views` tables.

use quorum_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

/// Column list for `comments` queries.
const COLUMNS: &str = "id, post_id, parent_id, author_id, content, score, status, posted";

/// Provides CRUD operations for comments and view receipts.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment, returning the generated ID.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO comments (post_id, parent_id, author_id, content) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(input.post_id)
        .bind(input.parent_id)
        .bind(input.author_id)
        .bind(&input.content)
        .fetch_one(pool)
        .await
    }

    /// Fetch a comment by ID.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Set the comment's soft-delete status.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: Option<i16>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE comments SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Record a view receipt for a comment.
    ///
    /// Idempotent: a duplicate receipt is ignored.
    pub async fn add_view(pool: &PgPool, user_id: DbId, comment_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO comment_views (user_id, comment_id) \
             VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_comment_views_user_comment DO NOTHING",
        )
        .bind(user_id)
        .bind(comment_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
