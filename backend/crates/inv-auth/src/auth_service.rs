use crate::messages::{
    ADMIN_NOT_FOUND, CREATOR_NOT_FOUND, CURRENT_PASSWORD_INCORRECT, INVALID_CREDENTIALS,
    LOGIN_SUCCESSFUL, ONLY_ADMINS_CAN_CREATE, ONLY_ADMINS_CAN_DEACTIVATE,
    ONLY_SECRETARIES_DEACTIVATED, PASSWORD_CHANGED, SECRETARY_CREATED, SECRETARY_DEACTIVATED,
    USER_NOT_FOUND, USERNAME_EXISTS,
};
use crate::{AuthError, PasswordHasher, Result as AuthErrorResult};

use inv_core::{
    AuthResponse, CoreError, CreateUserRequest, LoginRequest, Role, SessionUser, UserAccount,
};
use inv_db::{DbError, UserRepository};

use chrono::Utc;
use log::{info, warn};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Local account operations backing the login screen and the users view.
pub struct AuthService {
    users: UserRepository,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(pool: SqlitePool, bcrypt_cost: u32) -> Self {
        Self {
            users: UserRepository::new(pool),
            hasher: PasswordHasher::new(bcrypt_cost),
        }
    }

    /// Creates the given admin accounts unless all of them already exist.
    ///
    /// Existing accounts are never overwritten, so a changed password
    /// survives restarts. Returns the number of accounts created.
    pub async fn seed_admins<'a, I>(&self, admins: I) -> AuthErrorResult<usize>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let admins: Vec<(&str, &str)> = admins.into_iter().collect();
        let usernames: Vec<&str> = admins.iter().map(|(username, _)| *username).collect();

        let existing = self.users.count_by_usernames(&usernames).await?;
        if existing >= admins.len() as i64 {
            return Ok(0);
        }

        let mut created = 0;
        for (username, password) in admins {
            let hash = self.hasher.hash(password).await?;
            let account = UserAccount::new(username, hash, Role::Admin);
            if self.users.insert_if_absent(&account).await? {
                info!("Seeded admin account '{username}'");
                created += 1;
            }
        }

        Ok(created)
    }

    pub async fn login(&self, credentials: &LoginRequest) -> AuthErrorResult<AuthResponse> {
        credentials.validate()?;

        let Some(user) = self.users.find_by_username(&credentials.username).await? else {
            warn!("Login failed: unknown user '{}'", credentials.username);
            return Ok(AuthResponse::refused(INVALID_CREDENTIALS));
        };

        if !self
            .hasher
            .verify(&credentials.password, &user.password_hash)
            .await?
        {
            warn!("Login failed: wrong password for '{}'", user.username);
            return Ok(AuthResponse::refused(INVALID_CREDENTIALS));
        }

        info!("User '{}' logged in", user.username);
        Ok(AuthResponse::ok(
            LOGIN_SUCCESSFUL,
            Some(user.to_session_user()),
        ))
    }

    pub async fn create_secretary(
        &self,
        request: &CreateUserRequest,
        creator_username: &str,
    ) -> AuthErrorResult<AuthResponse> {
        request.validate()?;

        match self.users.find_by_username(creator_username).await? {
            None => return Ok(AuthResponse::refused(CREATOR_NOT_FOUND)),
            Some(creator) if creator.role != Role::Admin => {
                return Ok(AuthResponse::refused(ONLY_ADMINS_CAN_CREATE));
            }
            Some(_) => {}
        }

        let hash = self.hasher.hash(&request.password).await?;
        let account = UserAccount::new(&request.username, hash, Role::Secretary);

        match self.users.create(&account).await {
            Ok(()) => {
                info!(
                    "Admin '{creator_username}' created secretary '{}'",
                    account.username
                );
                Ok(AuthResponse::ok(
                    SECRETARY_CREATED,
                    Some(account.to_session_user()),
                ))
            }
            Err(DbError::UsernameTaken { .. }) => Ok(AuthResponse::refused(USERNAME_EXISTS)),
            Err(e) => Err(e.into()),
        }
    }

    /// All accounts, admins first, without password hashes.
    pub async fn get_all_users(&self) -> AuthErrorResult<Vec<SessionUser>> {
        let users = self.users.list_all().await?;
        Ok(users.iter().map(UserAccount::to_session_user).collect())
    }

    /// Changes the password of `user_id` after checking the current one.
    ///
    /// An unknown user is an error rather than a refusal: the caller holds a
    /// session for an account that no longer exists.
    pub async fn change_password(
        &self,
        user_id: &str,
        old_password: &str,
        new_password: &str,
    ) -> AuthErrorResult<AuthResponse> {
        if new_password.is_empty() {
            return Err(CoreError::validation("new password cannot be empty").into());
        }

        let user = match Uuid::parse_str(user_id) {
            Ok(id) => self.users.find_by_id(id).await?,
            Err(_) => None,
        }
        .ok_or_else(|| AuthError::user_not_found(user_id))?;

        if !self.hasher.verify(old_password, &user.password_hash).await? {
            return Ok(AuthResponse::refused(CURRENT_PASSWORD_INCORRECT));
        }

        let new_hash = self.hasher.hash(new_password).await?;
        if !self
            .users
            .update_password(user.id, &new_hash, Utc::now())
            .await?
        {
            return Err(AuthError::user_not_found(user_id));
        }

        info!("Password changed for '{}'", user.username);
        Ok(AuthResponse::ok(PASSWORD_CHANGED, None))
    }

    pub async fn deactivate_secretary(
        &self,
        user_id: &str,
        admin_username: &str,
    ) -> AuthErrorResult<AuthResponse> {
        match self.users.find_by_username(admin_username).await? {
            None => return Ok(AuthResponse::refused(ADMIN_NOT_FOUND)),
            Some(admin) if admin.role != Role::Admin => {
                return Ok(AuthResponse::refused(ONLY_ADMINS_CAN_DEACTIVATE));
            }
            Some(_) => {}
        }

        let target = match Uuid::parse_str(user_id) {
            Ok(id) => self.users.find_by_id(id).await?,
            Err(_) => None,
        };

        let target = match target {
            None => return Ok(AuthResponse::refused(USER_NOT_FOUND)),
            Some(user) if user.role != Role::Secretary => {
                return Ok(AuthResponse::refused(ONLY_SECRETARIES_DEACTIVATED));
            }
            Some(user) => user,
        };

        self.users.delete_secretary(target.id).await?;

        info!(
            "Admin '{admin_username}' deactivated secretary '{}'",
            target.username
        );
        Ok(AuthResponse::ok(SECRETARY_DEACTIVATED, None))
    }
}
