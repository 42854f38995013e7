use crate::Result as DbErrorResult;

use log::debug;
use sqlx::SqlitePool;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        role TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
"#;

/// Creates the tables this application needs. Idempotent.
///
/// The layout matches databases written by earlier desktop builds, so an
/// existing `fagan_inventory.db` is reused as-is.
pub async fn initialize_schema(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    debug!("Schema initialized");
    Ok(())
}
