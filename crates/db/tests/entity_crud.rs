//! Integration tests for the repository layer.
//!
//! Exercises users, items and sessions against an in-memory database:
//! - Create / find / list / update / delete for each table
//! - Unique constraint and foreign key violations
//! - Cascade delete from users to items and sessions

mod common;

use assert_matches::assert_matches;
use common::{seed_user, test_pool};
use todo_db::models::item::{CreateItem, UpdateItem};
use todo_db::models::session::CreateSession;
use todo_db::models::user::{CreateUser, UpdateUser};
use todo_db::repositories::{ItemRepo, SessionRepo, UserRepo};

fn new_item(owner_id: i64, title: &str) -> CreateItem {
    CreateItem {
        title: title.to_string(),
        owner_id,
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_user_then_find_by_email_returns_same_id() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "a@x.com").await;

    let found = UserRepo::find_by_email(&pool, "a@x.com")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(found.id, user.id);
    assert_eq!(found.email, "a@x.com");
}

#[tokio::test]
async fn duplicate_email_violates_unique_index() {
    let pool = test_pool().await;
    let first = seed_user(&pool, "dup@x.com").await;

    let result = UserRepo::create(
        &pool,
        &CreateUser {
            email: "dup@x.com".to_string(),
            hashed_password: "other".to_string(),
        },
    )
    .await;

    assert_matches!(result, Err(sqlx::Error::Database(e)) if e.is_unique_violation());

    let still_there = UserRepo::find_by_id(&pool, first.id).await.unwrap().unwrap();
    assert_eq!(still_there.hashed_password, "not-a-real-hash");
}

#[tokio::test]
async fn find_missing_user_returns_none() {
    let pool = test_pool().await;
    assert!(UserRepo::find_by_id(&pool, 999).await.unwrap().is_none());
    assert!(UserRepo::find_by_email(&pool, "ghost@x.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn list_users_applies_offset_and_limit() {
    let pool = test_pool().await;
    for i in 0..5 {
        seed_user(&pool, &format!("user{i}@x.com")).await;
    }

    let page = UserRepo::list(&pool, 1, 2).await.unwrap();
    let emails: Vec<_> = page.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, ["user1@x.com", "user2@x.com"]);
}

#[tokio::test]
async fn partial_user_update_keeps_omitted_fields() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "before@x.com").await;

    let updated = UserRepo::update(
        &pool,
        user.id,
        &UpdateUser {
            email: Some("after@x.com".to_string()),
            hashed_password: None,
        },
    )
    .await
    .unwrap()
    .expect("row should be updated");

    assert_eq!(updated.email, "after@x.com");
    assert_eq!(updated.hashed_password, "not-a-real-hash");
}

#[tokio::test]
async fn update_missing_user_returns_none() {
    let pool = test_pool().await;
    let result = UserRepo::update(&pool, 42, &UpdateUser::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn delete_user_cascades_to_items_and_sessions() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "gone@x.com").await;
    let item = ItemRepo::create(&pool, &new_item(user.id, "orphan?"))
        .await
        .unwrap();
    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            token: "t".repeat(32),
        },
    )
    .await
    .unwrap();

    let deleted = UserRepo::delete(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(deleted.id, user.id);

    assert!(ItemRepo::find_by_id(&pool, item.id).await.unwrap().is_none());
    assert!(SessionRepo::find_by_token(&pool, &"t".repeat(32))
        .await
        .unwrap()
        .is_none());
    assert!(UserRepo::delete(&pool, user.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_item_starts_incomplete() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "owner@x.com").await;

    let item = ItemRepo::create(&pool, &new_item(user.id, "buy milk"))
        .await
        .unwrap();

    assert_eq!(item.title, "buy milk");
    assert_eq!(item.owner_id, user.id);
    assert!(!item.is_completed);
}

#[tokio::test]
async fn item_with_unknown_owner_violates_foreign_key() {
    let pool = test_pool().await;
    let result = ItemRepo::create(&pool, &new_item(12345, "nobody's")).await;
    assert_matches!(result, Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation());
}

#[tokio::test]
async fn list_by_owner_only_returns_owned_items() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice@x.com").await;
    let bob = seed_user(&pool, "bob@x.com").await;
    ItemRepo::create(&pool, &new_item(alice.id, "a1")).await.unwrap();
    ItemRepo::create(&pool, &new_item(bob.id, "b1")).await.unwrap();
    ItemRepo::create(&pool, &new_item(alice.id, "a2")).await.unwrap();

    let items = ItemRepo::list_by_owner(&pool, alice.id, 0, 100).await.unwrap();
    let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["a1", "a2"]);

    let all = ItemRepo::list(&pool, 0, 100).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn list_for_owners_groups_in_one_query() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice@x.com").await;
    let bob = seed_user(&pool, "bob@x.com").await;
    let carol = seed_user(&pool, "carol@x.com").await;
    ItemRepo::create(&pool, &new_item(alice.id, "a1")).await.unwrap();
    ItemRepo::create(&pool, &new_item(bob.id, "b1")).await.unwrap();
    ItemRepo::create(&pool, &new_item(carol.id, "c1")).await.unwrap();

    let items = ItemRepo::list_for_owners(&pool, &[alice.id, carol.id])
        .await
        .unwrap();
    let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["a1", "c1"]);

    assert!(ItemRepo::list_for_owners(&pool, &[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn partial_item_update_leaves_completion_untouched() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "owner@x.com").await;
    let item = ItemRepo::create(&pool, &new_item(user.id, "draft")).await.unwrap();
    ItemRepo::toggle_completed(&pool, item.id).await.unwrap();

    let updated = ItemRepo::update(
        &pool,
        item.id,
        &UpdateItem {
            title: Some("final".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.title, "final");
    assert!(updated.is_completed);

    let unchanged = ItemRepo::update(&pool, item.id, &UpdateItem::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.title, "final");
}

#[tokio::test]
async fn toggle_twice_restores_original_state() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "owner@x.com").await;
    let item = ItemRepo::create(&pool, &new_item(user.id, "flip")).await.unwrap();

    let once = ItemRepo::toggle_completed(&pool, item.id).await.unwrap().unwrap();
    assert!(once.is_completed);
    let twice = ItemRepo::toggle_completed(&pool, item.id).await.unwrap().unwrap();
    assert!(!twice.is_completed);

    assert!(ItemRepo::toggle_completed(&pool, 999).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_item_returns_row_once() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "owner@x.com").await;
    let item = ItemRepo::create(&pool, &new_item(user.id, "bye")).await.unwrap();

    let deleted = ItemRepo::delete(&pool, item.id).await.unwrap().unwrap();
    assert_eq!(deleted, item);
    assert!(ItemRepo::delete(&pool, item.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn session_delete_by_token_is_not_repeatable() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "s@x.com").await;
    let token = todo_core::session_token::generate();
    let session = SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            token: token.clone(),
        },
    )
    .await
    .unwrap();
    assert_eq!(session.user_id, user.id);

    let found = SessionRepo::find_by_token(&pool, &token).await.unwrap().unwrap();
    assert_eq!(found.id, session.id);

    assert!(SessionRepo::delete_by_token(&pool, &token).await.unwrap().is_some());
    assert!(SessionRepo::delete_by_token(&pool, &token).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_session_token_violates_unique_index() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "s@x.com").await;
    let input = CreateSession {
        user_id: user.id,
        token: "same-token".to_string(),
    };
    SessionRepo::create(&pool, &input).await.unwrap();

    let result = SessionRepo::create(&pool, &input).await;
    assert_matches!(result, Err(sqlx::Error::Database(e)) if e.is_unique_violation());
}
