use inv_cli::App;
use inv_config::{AuthConfig, SeedAdmin};

use tempfile::TempDir;

pub const ADMIN: (&str, &str) = ("fagan@admin_1", "fagan_glass");
pub const SECOND_ADMIN: (&str, &str) = ("fagan@admin_2", "fagan_aluminum");

/// Lowest bcrypt cost, keeps the tests fast
pub const TEST_COST: u32 = 4;

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        bcrypt_cost: TEST_COST,
        seed_admins: vec![
            SeedAdmin::new(ADMIN.0, ADMIN.1),
            SeedAdmin::new(SECOND_ADMIN.0, SECOND_ADMIN.1),
        ],
    }
}

/// An app rooted in `temp`, as a fresh process would open it.
pub fn open_app(temp: &TempDir) -> App {
    App::new(
        temp.path().join("fagan_inventory.db"),
        &temp.path().join("session"),
        auth_config(),
    )
    .unwrap()
}
