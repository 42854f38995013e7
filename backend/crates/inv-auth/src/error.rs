use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid request: {source} {location}")]
    InvalidRequest {
        #[source]
        source: inv_core::CoreError,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: inv_db::DbError,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {source} {location}")]
    PasswordHash {
        #[source]
        source: bcrypt::BcryptError,
        location: ErrorLocation,
    },

    #[error("Hashing task failed: {message} {location}")]
    Task {
        message: String,
        location: ErrorLocation,
    },

    #[error("User not found: {user_id} {location}")]
    UserNotFound {
        user_id: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable machine-readable code for CLI output
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } => "INVALID_REQUEST",
            Self::Database { .. } => "DATABASE_ERROR",
            Self::PasswordHash { .. } => "PASSWORD_HASH_FAILED",
            Self::Task { .. } => "INTERNAL_ERROR",
            Self::UserNotFound { .. } => "USER_NOT_FOUND",
        }
    }

    #[track_caller]
    pub(crate) fn user_not_found(user_id: impl Into<String>) -> Self {
        Self::UserNotFound {
            user_id: user_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<inv_core::CoreError> for AuthError {
    #[track_caller]
    fn from(source: inv_core::CoreError) -> Self {
        Self::InvalidRequest {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<inv_db::DbError> for AuthError {
    #[track_caller]
    fn from(source: inv_db::DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<bcrypt::BcryptError> for AuthError {
    #[track_caller]
    fn from(source: bcrypt::BcryptError) -> Self {
        Self::PasswordHash {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<tokio::task::JoinError> for AuthError {
    #[track_caller]
    fn from(error: tokio::task::JoinError) -> Self {
        Self::Task {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
