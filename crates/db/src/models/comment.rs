//! Comment entity model.

use quorum_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `comments` table.
///
/// A non-null `status` marks the comment as soft-deleted; notifications
/// referencing such comments are hidden from listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub post_id: DbId,
    pub parent_id: Option<DbId>,
    pub author_id: DbId,
    pub content: String,
    pub score: i32,
    pub status: Option<i16>,
    pub posted: Timestamp,
}

/// DTO for inserting a comment.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub post_id: DbId,
    pub parent_id: Option<DbId>,
    pub author_id: DbId,
    pub content: String,
}
