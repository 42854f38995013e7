use crate::Role;

use serde::{Deserialize, Serialize};

/// The authenticated identity cached on the client.
///
/// The role is kept as the raw string it was persisted with, so a session
/// written by an older build with an unknown role still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    pub role: String,
}

impl SessionUser {
    pub fn new(id: impl Into<String>, username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            role: role.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin.as_str()
    }
}
