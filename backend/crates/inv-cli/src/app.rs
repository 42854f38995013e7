use crate::{
    CliError, Commands, PasswordCommands, Result as CliErrorResult, UserCommands,
};

use inv_auth::AuthService;
use inv_config::AuthConfig;
use inv_core::{CreateUserRequest, LoginRequest, SessionUser};
use inv_shell::{FileStorage, Navigation, Router, SessionStore, View};

use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;
use serde_json::{Value, json};

/// Signed-in state as reported by `whoami` and `logout`
#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub is_logged_in: bool,
    pub is_admin: bool,
    pub user: Option<SessionUser>,
}

/// The running shell: persisted session, router and account backend.
///
/// The database is opened only by commands that need it.
pub struct App {
    session: SessionStore<FileStorage>,
    router: Router,
    database_path: PathBuf,
    auth: AuthConfig,
}

impl App {
    pub fn new(
        database_path: impl Into<PathBuf>,
        session_dir: &Path,
        auth: AuthConfig,
    ) -> CliErrorResult<Self> {
        let session = SessionStore::new(FileStorage::new(session_dir))?;

        Ok(Self {
            session,
            router: Router::default(),
            database_path: database_path.into(),
            auth,
        })
    }

    pub fn session(&self) -> &SessionStore<FileStorage> {
        &self.session
    }

    pub async fn execute(&mut self, command: Commands) -> CliErrorResult<Value> {
        match command {
            Commands::Init => self.init().await,
            Commands::Login { username, password } => self.login(username, password).await,
            Commands::Logout => {
                self.session.logout()?;
                self.status()
            }
            Commands::Whoami => self.status(),
            Commands::Open { path } => {
                let navigation = self.router.navigate(&path, &self.session)?;
                Ok(navigation_json(navigation))
            }
            Commands::Users { action } => match action {
                UserCommands::List => self.list_users().await,
                UserCommands::CreateSecretary { username, password } => {
                    let creator = self.require_user()?.username.clone();
                    let request = CreateUserRequest { username, password };
                    let response = self
                        .auth_service()
                        .await?
                        .create_secretary(&request, &creator)
                        .await?;
                    Ok(serde_json::to_value(response)?)
                }
                UserCommands::Deactivate { id } => {
                    let admin = self.require_user()?.username.clone();
                    let response = self
                        .auth_service()
                        .await?
                        .deactivate_secretary(&id, &admin)
                        .await?;
                    Ok(serde_json::to_value(response)?)
                }
            },
            Commands::Password { action } => match action {
                PasswordCommands::Change { old, new } => {
                    let user_id = self.require_user()?.id.clone();
                    let response = self
                        .auth_service()
                        .await?
                        .change_password(&user_id, &old, &new)
                        .await?;
                    Ok(serde_json::to_value(response)?)
                }
            },
        }
    }

    async fn init(&self) -> CliErrorResult<Value> {
        let (_service, seeded) = self.open_backend().await?;
        Ok(json!({
            "database": self.database_path.display().to_string(),
            "seeded_admins": seeded,
        }))
    }

    async fn login(&mut self, username: String, password: String) -> CliErrorResult<Value> {
        let request = LoginRequest { username, password };
        let response = self.auth_service().await?.login(&request).await?;

        if response.success {
            self.session.set_user(response.user.clone())?;
        }

        Ok(serde_json::to_value(response)?)
    }

    /// Enters the users screen first; the account list is only read when
    /// the guard lets the session through.
    async fn list_users(&mut self) -> CliErrorResult<Value> {
        let navigation = self.router.navigate("/users", &self.session)?.clone();

        if navigation.view != View::Users {
            return Ok(json!({
                "navigation": navigation_json(&navigation),
                "users": Value::Null,
            }));
        }

        let users = self.auth_service().await?.get_all_users().await?;
        Ok(json!({
            "navigation": navigation_json(&navigation),
            "users": users,
        }))
    }

    fn status(&self) -> CliErrorResult<Value> {
        let status = SessionStatus {
            is_logged_in: self.session.is_logged_in(),
            is_admin: self.session.is_admin(),
            user: self.session.user().cloned(),
        };
        Ok(serde_json::to_value(status)?)
    }

    fn require_user(&self) -> CliErrorResult<&SessionUser> {
        self.session.user().ok_or_else(CliError::not_logged_in)
    }

    async fn auth_service(&self) -> CliErrorResult<AuthService> {
        let (service, _) = self.open_backend().await?;
        Ok(service)
    }

    /// Opens the database, creating the schema and any missing seed admins.
    async fn open_backend(&self) -> CliErrorResult<(AuthService, usize)> {
        let pool = inv_db::connect(&self.database_path).await?;
        inv_db::initialize_schema(&pool).await?;

        let service = AuthService::new(pool, self.auth.bcrypt_cost);
        let seeded = service
            .seed_admins(
                self.auth
                    .seed_admins
                    .iter()
                    .map(|admin| (admin.username.as_str(), admin.password.as_str())),
            )
            .await?;

        if seeded > 0 {
            info!("Seeded {seeded} admin account(s)");
        }

        Ok((service, seeded))
    }
}

fn navigation_json(navigation: &Navigation) -> Value {
    let mut value = json!({
        "path": navigation.path,
        "view": navigation.view,
    });
    if navigation.was_redirected() {
        value["redirected_from"] = Value::String(navigation.requested.clone());
    }
    value
}
