use crate::{DbError, Result as DbErrorResult};

use inv_core::{Role, UserAccount};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "users";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<UserAccount>> {
        let row = sqlx::query(
            r#"
                SELECT id, username, password_hash, role, created_at, updated_at
                FROM users
                WHERE username = ?
                "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<UserAccount>> {
        let row = sqlx::query(
            r#"
                SELECT id, username, password_hash, role, created_at, updated_at
                FROM users
                WHERE id = ?
                "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    /// All accounts, admins first, then by username.
    pub async fn list_all(&self) -> DbErrorResult<Vec<UserAccount>> {
        let rows = sqlx::query(
            r#"
                SELECT id, username, password_hash, role, created_at, updated_at
                FROM users
                ORDER BY role, username
                "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    /// Number of existing accounts among `usernames`.
    pub async fn count_by_usernames(&self, usernames: &[&str]) -> DbErrorResult<i64> {
        if usernames.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(*) FROM users WHERE username IN (");
        let mut separated = builder.separated(", ");
        for username in usernames {
            separated.push_bind(*username);
        }
        separated.push_unseparated(")");

        let count: i64 = builder.build_query_scalar().fetch_one(&self.pool).await?;
        Ok(count)
    }

    /// Inserts a new account. A clashing username is `DbError::UsernameTaken`.
    pub async fn create(&self, user: &UserAccount) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
                INSERT INTO users (id, username, password_hash, role, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at.to_rfc3339())
        .bind(user.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(DbError::UsernameTaken {
                    username: user.username.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Inserts the account unless the username already exists.
    /// Returns whether a row was written.
    pub async fn insert_if_absent(&self, user: &UserAccount) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                INSERT OR IGNORE INTO users (id, username, password_hash, role, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at.to_rfc3339())
        .bind(user.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        let result =
            sqlx::query("UPDATE users SET password_hash = ?, updated_at = ? WHERE id = ?")
                .bind(password_hash)
                .bind(updated_at.to_rfc3339())
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes the account only if it is a secretary.
    pub async fn delete_secretary(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ? AND role = ?")
            .bind(id.to_string())
            .bind(Role::Secretary.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_row(row: &SqliteRow) -> DbErrorResult<UserAccount> {
    let id: String = row.try_get("id")?;
    let role: String = row.try_get("role")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(UserAccount {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::invalid_row(TABLE, format!("Invalid UUID in users.id: {e}")))?,
        username: row.try_get("username")?,
        password_hash: row.try_get("password_hash")?,
        role: Role::from_str(&role)
            .map_err(|_| DbError::invalid_row(TABLE, format!("Unknown role '{role}'")))?,
        created_at: parse_timestamp(&created_at, "created_at")?,
        updated_at: parse_timestamp(&updated_at, "updated_at")?,
    })
}

fn parse_timestamp(value: &str, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::invalid_row(TABLE, format!("Invalid timestamp in users.{column}: {e}")))
}
