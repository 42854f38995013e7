use crate::View;

use serde::Serialize;

/// Access requirements checked by the guard before a view is entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteMeta {
    pub const PUBLIC: Self = Self {
        requires_auth: false,
        requires_admin: false,
    };

    pub const AUTHENTICATED: Self = Self {
        requires_auth: true,
        requires_admin: false,
    };

    pub const ADMIN: Self = Self {
        requires_auth: true,
        requires_admin: true,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    View(View),
    /// Static alias, followed without consulting the guard
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub target: RouteTarget,
    pub meta: RouteMeta,
}

impl Route {
    pub fn view(path: impl Into<String>, view: View, meta: RouteMeta) -> Self {
        Self {
            path: path.into(),
            target: RouteTarget::View(view),
            meta,
        }
    }

    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: RouteTarget::Redirect(to.into()),
            meta: RouteMeta::PUBLIC,
        }
    }
}
