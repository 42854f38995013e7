use crate::StorageError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Session storage error: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },

    #[error("No route matches '{path}' {location}")]
    RouteNotFound {
        path: String,
        location: ErrorLocation,
    },

    #[error("Navigation to '{path}' exceeded {hops} redirects {location}")]
    RedirectLoop {
        path: String,
        hops: usize,
        location: ErrorLocation,
    },
}

impl ShellError {
    #[track_caller]
    pub(crate) fn route_not_found(path: impl Into<String>) -> Self {
        Self::RouteNotFound {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn redirect_loop(path: impl Into<String>, hops: usize) -> Self {
        Self::RedirectLoop {
            path: path.into(),
            hops,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StorageError> for ShellError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;
