use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Secretary.as_str(), "secretary");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("secretary").unwrap(), Role::Secretary);
}

#[test]
fn test_role_from_str_is_case_sensitive() {
    let result = Role::from_str("Admin");

    assert!(matches!(result, Err(CoreError::InvalidRole { ref value, .. }) if value == "Admin"));
}

#[test]
fn test_role_serializes_as_snake_case() {
    assert_eq!(serde_json::to_string(&Role::Secretary).unwrap(), "\"secretary\"");
}
