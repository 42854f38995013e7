//! inventory - Fagan Inventory CLI
//!
//! Signs users in, navigates the guarded screens and manages accounts.
//! Every command prints a JSON document on stdout.
//!
//! # Examples
//!
//! ```bash
//! # Create the database and the seed admins
//! inventory init
//!
//! # Sign in and list accounts
//! inventory login --username fagan@admin_1 --password fagan_glass
//! inventory users list --pretty
//!
//! # Try a screen
//! inventory open /transactions
//! ```

use inv_cli::{App, Cli, CliError, Result as CliErrorResult, logger};

use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli.command).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: inv_cli::Commands) -> CliErrorResult<Value> {
    // Load and validate configuration
    let config = inv_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            CliError::logger(format!(
                "Failed to create log directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    debug!("Starting inventory v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let mut app = App::new(
        config.database_path()?,
        &config.session_dir()?,
        config.auth.clone(),
    )?;

    app.execute(command).await
}
