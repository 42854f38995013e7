//! User-facing outcome messages of the account commands.

pub const LOGIN_SUCCESSFUL: &str = "Login successful";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub const CREATOR_NOT_FOUND: &str = "Creator not found";
pub const ONLY_ADMINS_CAN_CREATE: &str = "Only admins can create secretary accounts";
pub const USERNAME_EXISTS: &str = "Username already exists";
pub const SECRETARY_CREATED: &str = "Secretary account created successfully";

pub const CURRENT_PASSWORD_INCORRECT: &str = "Current password is incorrect";
pub const PASSWORD_CHANGED: &str = "Password changed successfully";

pub const ADMIN_NOT_FOUND: &str = "Admin not found";
pub const ONLY_ADMINS_CAN_DEACTIVATE: &str = "Only admins can deactivate secretary accounts";
pub const USER_NOT_FOUND: &str = "User not found";
pub const ONLY_SECRETARIES_DEACTIVATED: &str = "Only secretary accounts can be deactivated";
pub const SECRETARY_DEACTIVATED: &str = "Secretary account deactivated successfully";
