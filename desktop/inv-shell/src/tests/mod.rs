
use crate::{MemoryStorage, SessionStore};

use inv_core::SessionUser;

pub(crate) fn admin() -> SessionUser {
    SessionUser::new(
        "0b6f2c1e-5f0a-4c1b-9d1e-8a3c2b7e4f10",
        "fagan@admin_1",
        "admin",
    )
}

pub(crate) fn secretary() -> SessionUser {
    SessionUser::new(
        "6d1e7a52-3b9c-4f8e-a2d4-1c5b9e0f7a33",
        "front_desk",
        "secretary",
    )
}

pub(crate) fn session_with(user: Option<SessionUser>) -> SessionStore<MemoryStorage> {
    let mut session = SessionStore::new(MemoryStorage::new()).unwrap();
    session.set_user(user).unwrap();
    session
}
