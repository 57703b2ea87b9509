//! Repository for the `posts` table.

use quorum_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::{CreatePost, Post};

/// Column list for `posts` queries.
const COLUMNS: &str = "id, sub_id, author_id, title, link, content, score, nsfw, posted";

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a post, returning the generated ID.
    pub async fn create(pool: &PgPool, input: &CreatePost) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO posts (sub_id, author_id, title, link, content) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id",
        )
        .bind(input.sub_id)
        .bind(input.author_id)
        .bind(&input.title)
        .bind(&input.link)
        .bind(&input.content)
        .fetch_one(pool)
        .await
    }

    /// Fetch a post by ID.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
