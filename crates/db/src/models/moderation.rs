//! Sub moderator membership model.

use quorum_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `sub_mods` table.
///
/// A row with `is_invite = false` marks an active moderator of the sub;
/// an invite row is a pending invitation and confers nothing. Active
/// moderator status on either side of a block edge overrides the block
/// for notifications scoped to that sub.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubMod {
    pub id: DbId,
    pub sub_id: DbId,
    pub user_id: DbId,
    pub is_invite: bool,
    pub created_at: Timestamp,
}
