use crate::{DASHBOARD_PATH, LOGIN_PATH, Route, RouteMeta, View};

/// Ordered list of routes; the first match wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Finds the route for `path`.
    ///
    /// Query string and fragment are ignored, as are trailing slashes and
    /// letter case.
    pub fn find(&self, path: &str) -> Option<&Route> {
        let wanted = normalize(path);
        self.routes
            .iter()
            .find(|route| normalize(&route.path).eq_ignore_ascii_case(&wanted))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(vec![
            Route::redirect("/", LOGIN_PATH),
            Route::view(LOGIN_PATH, View::Login, RouteMeta::PUBLIC),
            Route::view(DASHBOARD_PATH, View::Dashboard, RouteMeta::AUTHENTICATED),
            Route::view("/users", View::Users, RouteMeta::ADMIN),
            Route::view("/stocks", View::Stocks, RouteMeta::AUTHENTICATED),
            Route::view("/supply", View::Supply, RouteMeta::AUTHENTICATED),
            Route::view("/transactions", View::Transactions, RouteMeta::AUTHENTICATED),
        ])
    }
}

/// Strips query and fragment, ensures a leading slash and drops trailing ones.
pub(crate) fn normalize(path: &str) -> String {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let trimmed = path.trim_end_matches('/');

    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}
