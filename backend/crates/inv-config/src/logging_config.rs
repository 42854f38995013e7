use crate::{DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_FILENAME, DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Directory for log files, relative to the config directory
    pub dir: String,
    /// Log file name. `None` logs to stderr so stdout stays machine-readable.
    pub file: Option<String>,
    /// Colored level names (stderr only)
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: Some(String::from(DEFAULT_LOG_FILENAME)),
            colored: false,
        }
    }
}
