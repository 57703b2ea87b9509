//! PostgreSQL persistence layer for the quorum notification subsystem.
//!
//! Exposes domain [`models`] and the [`repositories`] that own all SQL.
//! Repositories are zero-sized structs with async methods taking `&PgPool`
//! as the first argument; callers compose them inside the notification
//! engine.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

/// Shared connection pool type used across the workspace.
pub type DbPool = sqlx::PgPool;

/// Default connection pool size.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Connect to PostgreSQL and build the shared pool.
pub async fn connect(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect(database_url)
        .await?;
    tracing::info!("Database pool established");
    Ok(pool)
}

/// Verify the database connection is alive.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await?;
    Ok(())
}
