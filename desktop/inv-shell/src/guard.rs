//! Access check run before every navigation.

use crate::{DASHBOARD_PATH, LOGIN_PATH, RouteMeta};

use inv_core::SessionUser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

/// Decides whether `user` may enter a route with the given `meta`.
///
/// Anonymous access to an authenticated route goes to the login page. An
/// admin route entered without an admin session goes to the dashboard.
pub fn check(meta: &RouteMeta, user: Option<&SessionUser>) -> GuardDecision {
    if meta.requires_auth && user.is_none() {
        return GuardDecision::Redirect(LOGIN_PATH.to_string());
    }

    if meta.requires_admin && !user.is_some_and(SessionUser::is_admin) {
        return GuardDecision::Redirect(DASHBOARD_PATH.to_string());
    }

    GuardDecision::Allow
}
