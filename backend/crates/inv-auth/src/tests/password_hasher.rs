use crate::{AuthError, PasswordHasher};

// bcrypt's minimum work factor keeps these fast
const TEST_COST: u32 = 4;

#[tokio::test]
async fn given_password_when_hashed_then_verifies() {
    let hasher = PasswordHasher::new(TEST_COST);

    let hash = hasher.hash("fagan_glass").await.unwrap();

    assert!(hash.starts_with("$2"));
    assert!(hasher.verify("fagan_glass", &hash).await.unwrap());
}

#[tokio::test]
async fn given_wrong_password_when_verified_then_false() {
    let hasher = PasswordHasher::new(TEST_COST);
    let hash = hasher.hash("fagan_glass").await.unwrap();

    let matches = hasher.verify("fagan_aluminum", &hash).await.unwrap();

    assert!(!matches);
}

#[tokio::test]
async fn given_same_password_when_hashed_twice_then_salts_differ() {
    let hasher = PasswordHasher::new(TEST_COST);

    let first = hasher.hash("secret").await.unwrap();
    let second = hasher.hash("secret").await.unwrap();

    assert_ne!(first, second);
}

#[tokio::test]
async fn given_hash_from_other_cost_when_verified_then_still_matches() {
    let hash = PasswordHasher::new(5).hash("secret").await.unwrap();

    let matches = PasswordHasher::new(TEST_COST)
        .verify("secret", &hash)
        .await
        .unwrap();

    assert!(matches);
}

#[tokio::test]
async fn given_malformed_hash_when_verified_then_password_hash_error() {
    let hasher = PasswordHasher::new(TEST_COST);

    let result = hasher.verify("secret", "not-a-bcrypt-hash").await;

    assert!(matches!(result, Err(AuthError::PasswordHash { .. })));
}

#[tokio::test]
async fn given_cost_out_of_range_when_hashed_then_error() {
    let hasher = PasswordHasher::new(3);

    let result = hasher.hash("secret").await;

    assert!(matches!(result, Err(AuthError::PasswordHash { .. })));
}
