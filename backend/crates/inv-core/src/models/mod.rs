pub mod auth_response;
pub mod create_user_request;
pub mod login_request;
pub mod role;
pub mod session_user;
pub mod user_account;
