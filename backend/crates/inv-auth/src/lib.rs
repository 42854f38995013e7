pub mod auth_service;
pub mod error;
pub mod messages;
pub mod password_hasher;

pub use auth_service::AuthService;
pub use error::{AuthError, Result};
pub use password_hasher::PasswordHasher;

#[cfg(test)]
mod tests;
