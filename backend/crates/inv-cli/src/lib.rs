//! inv-cli library
//!
//! Wires configuration, the account backend and the client shell together
//! behind the `inventory` binary.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod password_commands;
pub mod user_commands;


pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};
pub use password_commands::PasswordCommands;
pub use user_commands::UserCommands;
