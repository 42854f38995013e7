use std::fmt;

use serde::Serialize;

/// Screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Login,
    Dashboard,
    Users,
    Stocks,
    Supply,
    Transactions,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Login => "login",
            View::Dashboard => "dashboard",
            View::Users => "users",
            View::Stocks => "stocks",
            View::Supply => "supply",
            View::Transactions => "transactions",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
