//! Repository for the `subs` and `sub_mods` tables.

use quorum_core::types::DbId;
use sqlx::PgPool;

use crate::models::moderation::SubMod;
use crate::models::sub::{CreateSub, Sub};

/// Column list for `subs` queries.
const COLUMNS: &str = "id, name, nsfw, created_at";

/// Provides CRUD operations for subs and moderator membership.
pub struct SubRepo;

impl SubRepo {
    /// Insert a sub, returning the generated ID.
    pub async fn create(pool: &PgPool, input: &CreateSub) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO subs (name, nsfw) \
             VALUES ($1, $2) \
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.nsfw)
        .fetch_one(pool)
        .await
    }

    /// Fetch a sub by ID.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<Sub>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subs WHERE id = $1");
        sqlx::query_as::<_, Sub>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Add a moderator membership row for a sub.
    ///
    /// Pass `is_invite = true` for a pending invitation, which does not
    /// confer active moderator status.
    pub async fn add_moderator(
        pool: &PgPool,
        sub_id: DbId,
        user_id: DbId,
        is_invite: bool,
    ) -> Result<SubMod, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO sub_mods (sub_id, user_id, is_invite) \
             VALUES ($1, $2, $3) \
             RETURNING id, sub_id, user_id, is_invite, created_at",
        )
        .bind(sub_id)
        .bind(user_id)
        .bind(is_invite)
        .fetch_one(pool)
        .await
    }
}
