//! Send-time block filtering.

use quorum_core::types::DbId;
use quorum_db::repositories::BlockRepo;
use quorum_db::DbPool;

/// Decides whether a notification must be suppressed because the recipient
/// has blocked the sender.
///
/// The same predicate shape also gates visibility in listings, evaluated
/// inside the retrieval query (see `NotificationRepo::list_page`).
pub struct BlockFilter;

impl BlockFilter {
    /// Whether dispatch from `sender` to `target` is suppressed.
    ///
    /// System notifications (`sender = None`) are never blocked; the store
    /// is not consulted for them. Otherwise true iff `target` blocks
    /// `sender` and neither party is an active (non-invite) moderator of
    /// `sub`.
    pub async fn is_blocked(
        pool: &DbPool,
        sender: Option<DbId>,
        target: DbId,
        sub: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        match sender {
            Some(sender) => BlockRepo::is_blocked(pool, sender, target, sub).await,
            None => Ok(false),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn system_sender_is_never_blocked() {
        // A lazy pool never connects; the None arm must not touch it.
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://unused@localhost/unused")
            .unwrap();
        let blocked = BlockFilter::is_blocked(&pool, None, 1, Some(2)).await.unwrap();
        assert!(!blocked);
    }
}
