use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors surfaced by the `inventory` binary
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: inv_config::ConfigError,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: inv_db::DbError,
        location: ErrorLocation,
    },

    #[error("Account error ({code}): {source} {location}", code = .source.error_code())]
    Auth {
        #[source]
        source: inv_auth::AuthError,
        location: ErrorLocation,
    },

    #[error("Navigation error: {source} {location}")]
    Shell {
        #[source]
        source: inv_shell::ShellError,
        location: ErrorLocation,
    },

    #[error("Session storage error: {source} ({hint}) {location}", hint = .source.recovery_hint())]
    Storage {
        #[source]
        source: inv_shell::StorageError,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not logged in. Run `inventory login` first {location}")]
    NotLoggedIn { location: ErrorLocation },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_logged_in() -> Self {
        Self::NotLoggedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<inv_config::ConfigError> for CliError {
    #[track_caller]
    fn from(source: inv_config::ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<inv_db::DbError> for CliError {
    #[track_caller]
    fn from(source: inv_db::DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<inv_auth::AuthError> for CliError {
    #[track_caller]
    fn from(source: inv_auth::AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<inv_shell::ShellError> for CliError {
    #[track_caller]
    fn from(source: inv_shell::ShellError) -> Self {
        Self::Shell {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<inv_shell::StorageError> for CliError {
    #[track_caller]
    fn from(source: inv_shell::StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
