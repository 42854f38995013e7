pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::auth_response::AuthResponse;
pub use models::create_user_request::CreateUserRequest;
pub use models::login_request::LoginRequest;
pub use models::role::Role;
pub use models::session_user::SessionUser;
pub use models::user_account::UserAccount;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
