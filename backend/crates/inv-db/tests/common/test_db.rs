use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with the schema applied
pub async fn create_test_pool() -> SqlitePool {
    let pool = inv_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");

    inv_db::initialize_schema(&pool)
        .await
        .expect("Failed to initialize schema");

    pool
}
