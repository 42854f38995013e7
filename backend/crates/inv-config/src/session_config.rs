use crate::DEFAULT_SESSION_DIRECTORY;

use serde::Deserialize;

/// Where the client shell keeps its persisted key-value entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_SESSION_DIRECTORY),
        }
    }
}
