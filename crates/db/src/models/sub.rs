//! Sub (community) entity model.

use quorum_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `subs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sub {
    pub id: DbId,
    pub name: String,
    pub nsfw: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting a sub.
#[derive(Debug, Deserialize)]
pub struct CreateSub {
    pub name: String,
    pub nsfw: bool,
}
