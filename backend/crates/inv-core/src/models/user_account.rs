use crate::{Role, SessionUser};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAccount {
    pub fn new(username: &str, password_hash: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Public view of the account, as handed to the session store.
    pub fn to_session_user(&self) -> SessionUser {
        SessionUser::new(self.id.to_string(), &self.username, self.role.as_str())
    }
}
