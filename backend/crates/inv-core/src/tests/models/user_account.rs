use crate::{Role, UserAccount};

use googletest::prelude::*;

#[test]
fn given_account_when_serialized_then_password_hash_is_omitted() {
    let account = UserAccount::new("clerk", "$2b$10$secret".to_string(), Role::Secretary);

    let json = serde_json::to_string(&account).unwrap();

    assert_that!(json, not(contains_substring("password_hash")));
    assert_that!(json, not(contains_substring("$2b$10$secret")));
    assert_that!(json, contains_substring("\"role\":\"secretary\""));
}

#[test]
fn given_account_when_to_session_user_then_copies_identity() {
    let account = UserAccount::new("fagan@admin_1", String::new(), Role::Admin);

    let user = account.to_session_user();

    assert_that!(user.id, eq(&account.id.to_string()));
    assert_that!(user.username.as_str(), eq("fagan@admin_1"));
    assert_that!(user.role.as_str(), eq("admin"));
    assert_that!(user.is_admin(), eq(true));
}

#[test]
fn given_new_account_then_created_and_updated_match() {
    let account = UserAccount::new("clerk", String::new(), Role::Secretary);

    assert_that!(account.created_at, eq(account.updated_at));
}
