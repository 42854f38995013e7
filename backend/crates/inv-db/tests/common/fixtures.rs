use inv_core::{Role, UserAccount};

/// Creates a test admin account; the hash is opaque to the repository
pub fn create_test_admin(username: &str) -> UserAccount {
    UserAccount::new(username, format!("hash-of-{username}"), Role::Admin)
}

/// Creates a test secretary account
pub fn create_test_secretary(username: &str) -> UserAccount {
    UserAccount::new(username, format!("hash-of-{username}"), Role::Secretary)
}
