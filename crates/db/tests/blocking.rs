//! Integration tests for the block predicate and block-gated visibility.

mod common;

use common::{notification, post, sub, user};
use quorum_core::notification::KIND_POST_REPLY;
use quorum_db::repositories::{BlockRepo, NotificationRepo, SubRepo};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn no_block_row_means_not_blocked(pool: PgPool) {
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;
    let rust = sub(&pool, "rust").await;

    assert!(!BlockRepo::is_blocked(&pool, alice, bob, Some(rust)).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn recipient_block_edge_suppresses_sender(pool: PgPool) {
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;
    let rust = sub(&pool, "rust").await;

    // bob blocks alice; the reverse direction stays unaffected.
    let edge = BlockRepo::create(&pool, bob, alice).await.unwrap();
    assert_eq!(edge.user_id, bob);
    assert_eq!(edge.target_id, alice);

    assert!(BlockRepo::is_blocked(&pool, alice, bob, Some(rust)).await.unwrap());
    assert!(!BlockRepo::is_blocked(&pool, bob, alice, Some(rust)).await.unwrap());

    // Without a sub the edge alone decides.
    assert!(BlockRepo::is_blocked(&pool, alice, bob, None).await.unwrap());

    // Removing the edge restores delivery.
    assert!(BlockRepo::delete(&pool, bob, alice).await.unwrap());
    assert!(!BlockRepo::is_blocked(&pool, alice, bob, Some(rust)).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn active_moderator_on_either_side_overrides_block(pool: PgPool) {
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;
    let rust = sub(&pool, "rust").await;
    let other = sub(&pool, "other").await;

    BlockRepo::create(&pool, bob, alice).await.unwrap();

    // Sender becomes an active mod of the relevant sub.
    let membership = SubRepo::add_moderator(&pool, rust, alice, false).await.unwrap();
    assert!(!membership.is_invite);
    assert!(!BlockRepo::is_blocked(&pool, alice, bob, Some(rust)).await.unwrap());

    // Mod status on an unrelated sub does not help.
    assert!(BlockRepo::is_blocked(&pool, alice, bob, Some(other)).await.unwrap());

    // Recipient-side mod status overrides as well.
    SubRepo::add_moderator(&pool, other, bob, false).await.unwrap();
    assert!(!BlockRepo::is_blocked(&pool, alice, bob, Some(other)).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pending_invite_confers_no_override(pool: PgPool) {
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;
    let rust = sub(&pool, "rust").await;

    BlockRepo::create(&pool, bob, alice).await.unwrap();
    SubRepo::add_moderator(&pool, rust, alice, true).await.unwrap();

    assert!(BlockRepo::is_blocked(&pool, alice, bob, Some(rust)).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blocked_sender_hidden_from_listing_but_row_persists(pool: PgPool) {
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;
    let rust = sub(&pool, "rust").await;
    let p = post(&pool, rust, bob, "title").await;

    BlockRepo::create(&pool, bob, alice).await.unwrap();

    let id =
        notification(&pool, KIND_POST_REPLY, bob, Some(alice), Some(rust), Some(p), None).await;

    let page = NotificationRepo::list_page(&pool, bob, 1).await.unwrap();
    assert!(page.is_empty());
    assert!(NotificationRepo::get(&pool, id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn moderator_status_restores_listing_visibility(pool: PgPool) {
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;
    let rust = sub(&pool, "rust").await;
    let p = post(&pool, rust, bob, "title").await;

    BlockRepo::create(&pool, bob, alice).await.unwrap();
    notification(&pool, KIND_POST_REPLY, bob, Some(alice), Some(rust), Some(p), None).await;

    assert!(NotificationRepo::list_page(&pool, bob, 1).await.unwrap().is_empty());

    // The same notification becomes visible once the sender is an active mod.
    SubRepo::add_moderator(&pool, rust, alice, false).await.unwrap();
    assert_eq!(NotificationRepo::list_page(&pool, bob, 1).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn system_kinds_are_never_hidden_by_blocking(pool: PgPool) {
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;

    BlockRepo::create(&pool, bob, alice).await.unwrap();

    notification(&pool, "SUB_BANNED", bob, Some(alice), None, None, None).await;

    let page = NotificationRepo::list_page(&pool, bob, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].kind, "SUB_BANNED");
}
