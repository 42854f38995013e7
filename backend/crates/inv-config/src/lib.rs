mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod seed_admin;
mod session_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use seed_admin::SeedAdmin;
pub use session_config::SessionConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV_VAR: &str = "INV_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".inventory";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "fagan_inventory.db";

const DEFAULT_BCRYPT_COST: u32 = 10;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_FILENAME: &str = "inventory.log";

const DEFAULT_SESSION_DIRECTORY: &str = "session";
