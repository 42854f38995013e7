use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BCRYPT_COST, MAX_BCRYPT_COST, MIN_BCRYPT_COST,
    SeedAdmin,
};

use std::collections::HashSet;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    pub seed_admins: Vec<SeedAdmin>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            seed_admins: vec![
                SeedAdmin::new("fagan@admin_1", "fagan_glass"),
                SeedAdmin::new("fagan@admin_2", "fagan_aluminum"),
            ],
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::auth(format!(
                "auth.bcrypt_cost must be {}-{}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }

        let mut seen = HashSet::new();
        for admin in &self.seed_admins {
            if admin.username.trim().is_empty() {
                return Err(ConfigError::auth("auth.seed_admins username cannot be empty"));
            }
            if admin.password.is_empty() {
                return Err(ConfigError::auth(format!(
                    "auth.seed_admins password for '{}' cannot be empty",
                    admin.username
                )));
            }
            if !seen.insert(admin.username.as_str()) {
                return Err(ConfigError::auth(format!(
                    "auth.seed_admins contains duplicate username '{}'",
                    admin.username
                )));
            }
        }

        Ok(())
    }
}
