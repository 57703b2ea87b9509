//! Post entity model.

use quorum_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub sub_id: DbId,
    pub author_id: DbId,
    pub title: String,
    pub link: Option<String>,
    pub content: Option<String>,
    pub score: i32,
    pub nsfw: bool,
    pub posted: Timestamp,
}

/// DTO for inserting a post.
#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub sub_id: DbId,
    pub author_id: DbId,
    pub title: String,
    pub link: Option<String>,
    pub content: Option<String>,
}
