use crate::guard::{self, GuardDecision};
use crate::routes::route_table::normalize;
use crate::{
    KeyValueStorage, MAX_REDIRECTS, Result as ShellErrorResult, RouteTable, RouteTarget,
    SessionStore, ShellError, View,
};

use log::{debug, info};
use serde::Serialize;

/// Outcome of a completed navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Path as asked for, normalized
    pub requested: String,
    /// Path of the view that was entered
    pub path: String,
    pub view: View,
}

impl Navigation {
    pub fn was_redirected(&self) -> bool {
        !self.requested.eq_ignore_ascii_case(&self.path)
    }
}

pub struct Router {
    table: RouteTable,
    current: Option<Navigation>,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            current: None,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The last successful navigation.
    pub fn current(&self) -> Option<&Navigation> {
        self.current.as_ref()
    }

    /// Resolves `path` to a view, following static and guard redirects.
    ///
    /// The guard reads the session from `session`'s storage on every hop.
    pub fn navigate<S: KeyValueStorage>(
        &mut self,
        path: &str,
        session: &SessionStore<S>,
    ) -> ShellErrorResult<&Navigation> {
        let requested = normalize(path);
        let mut target = requested.clone();

        for _ in 0..=MAX_REDIRECTS {
            let route = self
                .table
                .find(&target)
                .ok_or_else(|| ShellError::route_not_found(&target))?;

            let view = match &route.target {
                RouteTarget::Redirect(to) => {
                    debug!("'{}' redirects to '{to}'", route.path);
                    target = normalize(to);
                    continue;
                }
                RouteTarget::View(view) => *view,
            };

            let user = session.persisted_user()?;
            match guard::check(&route.meta, user.as_ref()) {
                GuardDecision::Allow => {
                    let navigation = Navigation {
                        requested,
                        path: route.path.clone(),
                        view,
                    };
                    if navigation.was_redirected() {
                        info!(
                            "Navigation to '{}' ended at '{}'",
                            navigation.requested, navigation.path
                        );
                    } else {
                        debug!("Entered '{}'", navigation.path);
                    }
                    return Ok(self.current.insert(navigation));
                }
                GuardDecision::Redirect(to) => {
                    debug!("Guard redirected '{}' to '{to}'", route.path);
                    target = normalize(&to);
                }
            }
        }

        Err(ShellError::redirect_loop(requested, MAX_REDIRECTS))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RouteTable::default())
    }
}
