mod common;

use common::{create_test_admin, create_test_pool, create_test_secretary};

use inv_core::Role;
use inv_db::{DbError, UserRepository};

use chrono::{Duration, Utc};
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_created_user_when_found_by_username_then_all_fields_round_trip() {
    // Given: A repository with one secretary
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    let user = create_test_secretary("clerk");

    // When
    repo.create(&user).await.unwrap();
    let result = repo.find_by_username("clerk").await.unwrap();

    // Then
    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.id, eq(user.id));
    assert_that!(found.username, eq(&user.username));
    assert_that!(found.password_hash, eq(&user.password_hash));
    assert_that!(found.role, eq(Role::Secretary));
    assert_that!(found.created_at.timestamp(), eq(user.created_at.timestamp()));
}

#[tokio::test]
async fn given_created_user_when_found_by_id_then_returns_user() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    let user = create_test_admin("owner");
    repo.create(&user).await.unwrap();

    let result = repo.find_by_id(user.id).await.unwrap();

    assert_that!(result, some(anything()));
    assert_that!(result.unwrap().role, eq(Role::Admin));
}

#[tokio::test]
async fn given_empty_database_when_finding_nonexistent_user_then_returns_none() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    assert_that!(repo.find_by_username("ghost").await.unwrap(), none());
    assert_that!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), none());
}

#[tokio::test]
async fn given_existing_username_when_create_then_username_taken_error() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    repo.create(&create_test_secretary("clerk")).await.unwrap();

    // When
    let result = repo.create(&create_test_secretary("clerk")).await;

    // Then
    assert!(matches!(
        result,
        Err(DbError::UsernameTaken { ref username, .. }) if username == "clerk"
    ));
}

#[tokio::test]
async fn given_mixed_roles_when_list_all_then_ordered_by_role_then_username() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    repo.create(&create_test_secretary("zed")).await.unwrap();
    repo.create(&create_test_admin("owner_b")).await.unwrap();
    repo.create(&create_test_secretary("amy")).await.unwrap();
    repo.create(&create_test_admin("owner_a")).await.unwrap();

    // When
    let users = repo.list_all().await.unwrap();

    // Then
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["owner_a", "owner_b", "amy", "zed"]);
}

#[tokio::test]
async fn given_some_usernames_exist_when_count_by_usernames_then_counts_only_those() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    repo.create(&create_test_admin("fagan@admin_1")).await.unwrap();

    let count = repo
        .count_by_usernames(&["fagan@admin_1", "fagan@admin_2"])
        .await
        .unwrap();

    assert_that!(count, eq(1));
}

#[tokio::test]
async fn given_no_usernames_when_count_by_usernames_then_zero() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    assert_that!(repo.count_by_usernames(&[]).await.unwrap(), eq(0));
}

#[tokio::test]
async fn given_existing_username_when_insert_if_absent_then_keeps_original() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    let original = create_test_admin("owner");
    repo.create(&original).await.unwrap();

    // When
    let mut replacement = create_test_admin("owner");
    replacement.password_hash = "different".to_string();
    let inserted = repo.insert_if_absent(&replacement).await.unwrap();

    // Then
    assert_that!(inserted, eq(false));
    let found = repo.find_by_username("owner").await.unwrap().unwrap();
    assert_that!(found.id, eq(original.id));
    assert_that!(found.password_hash, eq(&original.password_hash));
}

#[tokio::test]
async fn given_new_username_when_insert_if_absent_then_inserted() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    let inserted = repo.insert_if_absent(&create_test_admin("owner")).await.unwrap();

    assert_that!(inserted, eq(true));
}

#[tokio::test]
async fn given_user_when_update_password_then_hash_and_updated_at_change() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    let user = create_test_secretary("clerk");
    repo.create(&user).await.unwrap();
    let later = Utc::now() + Duration::minutes(5);

    // When
    let updated = repo.update_password(user.id, "new-hash", later).await.unwrap();

    // Then
    assert_that!(updated, eq(true));
    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_that!(found.password_hash.as_str(), eq("new-hash"));
    assert_that!(found.updated_at.timestamp(), eq(later.timestamp()));
    assert_that!(found.created_at.timestamp(), eq(user.created_at.timestamp()));
}

#[tokio::test]
async fn given_unknown_id_when_update_password_then_false() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    let updated = repo
        .update_password(Uuid::new_v4(), "new-hash", Utc::now())
        .await
        .unwrap();

    assert_that!(updated, eq(false));
}

#[tokio::test]
async fn given_secretary_when_delete_secretary_then_removed() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    let user = create_test_secretary("clerk");
    repo.create(&user).await.unwrap();

    let deleted = repo.delete_secretary(user.id).await.unwrap();

    assert_that!(deleted, eq(true));
    assert_that!(repo.find_by_id(user.id).await.unwrap(), none());
}

#[tokio::test]
async fn given_admin_when_delete_secretary_then_not_removed() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    let admin = create_test_admin("owner");
    repo.create(&admin).await.unwrap();

    let deleted = repo.delete_secretary(admin.id).await.unwrap();

    assert_that!(deleted, eq(false));
    assert_that!(repo.find_by_id(admin.id).await.unwrap(), some(anything()));
}

#[tokio::test]
async fn given_row_with_unknown_role_when_found_then_invalid_row_error() {
    // Given: A row written by something other than this repository
    let pool = create_test_pool().await;
    let now = Utc::now().to_rfc3339();
    sqlx::query(
        "INSERT INTO users (id, username, password_hash, role, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(Uuid::new_v4().to_string())
    .bind("auditor")
    .bind("hash")
    .bind("auditor")
    .bind(&now)
    .bind(&now)
    .execute(&pool)
    .await
    .unwrap();
    let repo = UserRepository::new(pool);

    // When
    let result = repo.find_by_username("auditor").await;

    // Then
    assert!(matches!(result, Err(DbError::InvalidRow { .. })));
}
