//! Client shell of the inventory application.
//!
//! A [`SessionStore`] holds the signed-in user and persists it under the
//! `user` key of a [`KeyValueStorage`]. The [`Router`] resolves paths against
//! the [`RouteTable`] and consults the [`guard`] with the persisted session
//! before every view is entered.

pub mod error;
pub mod guard;
pub mod router;
pub mod routes;
pub mod session_store;
pub mod storage;

pub use error::{Result, ShellError};
pub use guard::GuardDecision;
pub use router::{Navigation, Router};
pub use routes::{Route, RouteMeta, RouteTable, RouteTarget, View};
pub use session_store::{SESSION_USER_KEY, SessionStore};
pub use storage::{
    FileStorage, KeyValueStorage, MemoryStorage, StorageError, StorageResult,
};

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Upper bound on redirect hops for a single navigation
const MAX_REDIRECTS: usize = 10;

#[cfg(test)]
mod tests;
