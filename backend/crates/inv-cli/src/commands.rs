use crate::{password_commands::PasswordCommands, user_commands::UserCommands};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database and seed the admin accounts
    Init,

    /// Sign in and remember the session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the current session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Navigate to a screen, applying the access guard
    Open {
        /// Route path, e.g. /dashboard
        path: String,
    },

    /// Account management
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Password operations for the signed-in user
    Password {
        #[command(subcommand)]
        action: PasswordCommands,
    },
}
