//! Shared fixtures for the database integration tests.

use quorum_core::types::DbId;
use quorum_db::models::comment::CreateComment;
use quorum_db::models::notification::NewNotification;
use quorum_db::models::post::CreatePost;
use quorum_db::models::sub::CreateSub;
use quorum_db::models::user::CreateUser;
use quorum_db::repositories::{CommentRepo, NotificationRepo, PostRepo, SubRepo, UserRepo};
use sqlx::PgPool;

pub async fn user(pool: &PgPool, name: &str) -> DbId {
    UserRepo::create(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: None,
        },
    )
    .await
    .expect("user fixture")
}

pub async fn sub(pool: &PgPool, name: &str) -> DbId {
    SubRepo::create(
        pool,
        &CreateSub {
            name: name.to_string(),
            nsfw: false,
        },
    )
    .await
    .expect("sub fixture")
}

pub async fn post(pool: &PgPool, sub_id: DbId, author_id: DbId, title: &str) -> DbId {
    PostRepo::create(
        pool,
        &CreatePost {
            sub_id,
            author_id,
            title: title.to_string(),
            link: None,
            content: Some("post body".to_string()),
        },
    )
    .await
    .expect("post fixture")
}

pub async fn comment(
    pool: &PgPool,
    post_id: DbId,
    parent_id: Option<DbId>,
    author_id: DbId,
    content: &str,
) -> DbId {
    CommentRepo::create(
        pool,
        &CreateComment {
            post_id,
            parent_id,
            author_id,
            content: content.to_string(),
        },
    )
    .await
    .expect("comment fixture")
}

/// Insert a notification row directly through the repository.
pub async fn notification(
    pool: &PgPool,
    kind: &str,
    target_id: DbId,
    sender_id: Option<DbId>,
    sub_id: Option<DbId>,
    post_id: Option<DbId>,
    comment_id: Option<DbId>,
) -> DbId {
    NotificationRepo::create(
        pool,
        &NewNotification {
            kind: kind.to_string(),
            target_id,
            sender_id,
            sub_id,
            post_id,
            comment_id,
            content: None,
        },
    )
    .await
    .expect("notification fixture")
}

/// Shift a notification's creation time into the past.
pub async fn backdate(pool: &PgPool, id: DbId, days: i64) {
    sqlx::query("UPDATE notifications SET created_at = NOW() - ($2 || ' days')::interval WHERE id = $1")
        .bind(id)
        .bind(days.to_string())
        .execute(pool)
        .await
        .expect("backdate fixture");
}
