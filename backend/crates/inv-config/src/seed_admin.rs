use serde::Deserialize;

/// An admin account created at database initialization when missing.
#[derive(Clone, Deserialize)]
pub struct SeedAdmin {
    pub username: String,
    pub password: String,
}

impl SeedAdmin {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

// Keeps the password out of `Debug` output (config dumps, error logs)
impl std::fmt::Debug for SeedAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedAdmin")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
