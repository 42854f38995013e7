mod requests;
mod role;
mod session_user;
mod user_account;
