use crate::{CreateUserRequest, LoginRequest};

use googletest::prelude::*;

fn login(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

fn create(username: &str, password: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn given_complete_login_when_validate_then_ok() {
    assert_that!(login("clerk", "pw").validate(), ok(anything()));
}

#[test]
fn given_blank_username_when_validate_login_then_error() {
    let result = login("   ", "pw").validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("username")
    );
}

#[test]
fn given_empty_password_when_validate_login_then_error() {
    assert_that!(login("clerk", "").validate(), err(anything()));
}

#[test]
fn given_blank_username_when_validate_create_then_error() {
    assert_that!(create(" \t", "pw").validate(), err(anything()));
}

#[test]
fn given_long_padded_username_when_validate_create_then_ok() {
    let username = format!(" {}", "x".repeat(200));

    assert_that!(create(&username, "pw").validate(), ok(anything()));
}
