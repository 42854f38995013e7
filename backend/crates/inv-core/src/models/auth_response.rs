use crate::SessionUser;

use serde::{Deserialize, Serialize};

/// Outcome of an account command.
///
/// Refusals (bad credentials, missing privileges, duplicate usernames) are
/// reported with `success: false` rather than as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub user: Option<SessionUser>,
}

impl AuthResponse {
    pub fn ok(message: impl Into<String>, user: Option<SessionUser>) -> Self {
        Self {
            success: true,
            message: message.into(),
            user,
        }
    }

    pub fn refused(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            user: None,
        }
    }
}
