use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

impl CreateUserRequest {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.username.trim().is_empty() {
            return Err(CoreError::validation("username cannot be empty"));
        }
        if self.password.is_empty() {
            return Err(CoreError::validation("password cannot be empty"));
        }
        Ok(())
    }
}
