#![allow(dead_code)]

use inv_auth::AuthService;
use inv_core::{CreateUserRequest, LoginRequest, SessionUser};

use sqlx::SqlitePool;

pub const TEST_COST: u32 = 4;
pub const ADMIN: (&str, &str) = ("fagan@admin_1", "fagan_glass");
pub const SECOND_ADMIN: (&str, &str) = ("fagan@admin_2", "fagan_aluminum");

pub async fn create_test_pool() -> SqlitePool {
    let pool = inv_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");
    inv_db::initialize_schema(&pool)
        .await
        .expect("Failed to initialize schema");
    pool
}

/// Service over a fresh database holding the two default admins
pub async fn create_seeded_service() -> AuthService {
    let service = AuthService::new(create_test_pool().await, TEST_COST);
    service
        .seed_admins([ADMIN, SECOND_ADMIN])
        .await
        .expect("Failed to seed admins");
    service
}

pub fn login_request(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

pub fn create_request(username: &str, password: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

/// Creates a secretary through the service and returns its public view
pub async fn create_secretary(service: &AuthService, username: &str, password: &str) -> SessionUser {
    service
        .create_secretary(&create_request(username, password), ADMIN.0)
        .await
        .expect("create_secretary failed")
        .user
        .expect("created secretary missing from response")
}
