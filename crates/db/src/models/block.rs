//! User content-block entity model.

use quorum_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_blocks` table.
///
/// Directed edge: `user_id` blocks `target_id`. Used both to hide
/// notifications from blocked senders and to suppress their delivery.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserBlock {
    pub id: DbId,
    pub user_id: DbId,
    pub target_id: DbId,
    pub created_at: Timestamp,
}
