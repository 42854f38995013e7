use crate::SessionUser;

use googletest::prelude::*;

#[test]
fn given_admin_role_when_is_admin_then_true() {
    let user = SessionUser::new("1", "fagan@admin_1", "admin");

    assert_that!(user.is_admin(), eq(true));
}

#[test]
fn given_secretary_role_when_is_admin_then_false() {
    let user = SessionUser::new("2", "clerk", "secretary");

    assert_that!(user.is_admin(), eq(false));
}

#[test]
fn given_unknown_role_when_deserialized_then_kept_verbatim() {
    let json = r#"{"id":"abc","username":"legacy","role":"auditor"}"#;

    let user: SessionUser = serde_json::from_str(json).unwrap();

    assert_that!(user.role.as_str(), eq("auditor"));
    assert_that!(user.is_admin(), eq(false));
}

#[test]
fn given_missing_role_when_deserialized_then_error() {
    let json = r#"{"id":"abc","username":"legacy"}"#;

    let result = serde_json::from_str::<SessionUser>(json);

    assert_that!(result, err(anything()));
}
