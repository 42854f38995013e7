use crate::{KeyValueStorage, StorageResult};

use inv_core::SessionUser;

use log::{debug, warn};

/// Storage key holding the serialized [`SessionUser`].
pub const SESSION_USER_KEY: &str = "user";

/// The signed-in user, mirrored to a [`KeyValueStorage`].
///
/// The in-memory user and the persisted `user` key always agree after any
/// mutation through this type.
#[derive(Debug)]
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
    user: Option<SessionUser>,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Restores the session persisted in `storage`, if any.
    ///
    /// A value that cannot be decoded is discarded and removed.
    pub fn new(mut storage: S) -> StorageResult<Self> {
        let user = match read_persisted(&storage)? {
            Persisted::Absent => None,
            Persisted::User(user) => {
                debug!("Restored session for '{}'", user.username);
                Some(user)
            }
            Persisted::Unreadable(reason) => {
                warn!("Discarding unreadable persisted session: {reason}");
                storage.remove_item(SESSION_USER_KEY)?;
                None
            }
        };

        Ok(Self { storage, user })
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Replaces the current user. `None` deletes the persisted key.
    pub fn set_user(&mut self, user: Option<SessionUser>) -> StorageResult<()> {
        match &user {
            Some(user) => {
                let serialized = serde_json::to_string(user)?;
                self.storage.set_item(SESSION_USER_KEY, &serialized)?;
            }
            None => self.storage.remove_item(SESSION_USER_KEY)?,
        }

        self.user = user;
        Ok(())
    }

    pub fn logout(&mut self) -> StorageResult<()> {
        if let Some(user) = &self.user {
            debug!("Logging out '{}'", user.username);
        }
        self.set_user(None)
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(SessionUser::is_admin)
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Reads the session straight from storage, bypassing the cached user.
    ///
    /// Unreadable data counts as no session.
    pub fn persisted_user(&self) -> StorageResult<Option<SessionUser>> {
        match read_persisted(&self.storage)? {
            Persisted::User(user) => Ok(Some(user)),
            Persisted::Absent => Ok(None),
            Persisted::Unreadable(reason) => {
                warn!("Ignoring unreadable persisted session: {reason}");
                Ok(None)
            }
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

enum Persisted {
    Absent,
    User(SessionUser),
    Unreadable(String),
}

/// Undecodable bytes and malformed JSON both come back as `Unreadable`;
/// only I/O failures are errors.
fn read_persisted<S: KeyValueStorage>(storage: &S) -> StorageResult<Persisted> {
    let raw = match storage.get_item(SESSION_USER_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Ok(Persisted::Absent),
        Err(e) if e.is_unreadable_data() => return Ok(Persisted::Unreadable(e.to_string())),
        Err(e) => return Err(e),
    };

    Ok(match serde_json::from_str(&raw) {
        Ok(user) => Persisted::User(user),
        Err(e) => Persisted::Unreadable(e.to_string()),
    })
}
