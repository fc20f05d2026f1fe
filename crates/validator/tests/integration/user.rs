//! Flat record validation.

use fieldguard_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{User, init_tracing, sorted_messages};

#[test]
fn valid_user_passes() {
    init_tracing();
    let user = User::new("codestack", "user@example.com", "Password123@#12");
    assert!(Validator::new().validate(&user).is_ok());
}

#[test]
fn every_failing_field_is_reported() {
    let user = User::new("ab", "invalid-email", "weak");
    let errors = Validator::new().validate(&user).unwrap_err();

    assert_eq!(
        sorted_messages(&errors),
        [
            "email: field must be a valid email address",
            "password: password must have a minimum length of 8 characters",
            "username: field must have a minimum length of 3 characters",
        ]
    );
}

#[test]
fn in_range_username_is_not_reported() {
    init_tracing();
    let user = User::new("short", "invalid-email", "weak");
    let errors = Validator::new().validate(&user).unwrap_err();

    assert_eq!(errors.for_field("username").count(), 0);
    assert_eq!(errors.for_field("email").count(), 1);
    assert_eq!(errors.for_field("password").count(), 1);
}

#[test]
fn sequential_rendering_is_stable() {
    let validator = Validator::with_config(ValidatorConfig::new().with_fan_out(FanOut::Sequential));
    let user = User::new("ab", "invalid-email", "weak");
    let errors = validator.validate(&user).unwrap_err();

    insta::assert_snapshot!(errors.to_string(), @r"
    username: field must have a minimum length of 3 characters
    email: field must be a valid email address
    password: password must have a minimum length of 8 characters
    ");
}

#[test]
fn empty_fields_fail_required_and_rules_run_independently() {
    let user = User::new("", "", "");
    let errors = Validator::new().validate(&user).unwrap_err();

    let username: Vec<_> = errors.for_field("username").map(|e| e.code.as_ref()).collect();
    assert_eq!(username, ["required", "min_length"]);

    let email: Vec<_> = errors.for_field("email").map(|e| e.code.as_ref()).collect();
    assert_eq!(email, ["required", "email"]);

    let password: Vec<_> = errors.for_field("password").map(|e| e.code.as_ref()).collect();
    assert_eq!(password, ["required", "password"]);
}

#[test]
fn custom_password_policy_applies() {
    let validator = Validator::new();
    let user = User::new("codestack", "user@example.com", "weak");
    assert!(validator.validate(&user).is_err());

    validator.set_custom_password_rules(PasswordPolicy::relaxed().min_length(4));
    assert!(validator.validate(&user).is_ok());

    validator.clear_custom_password_rules();
    assert!(validator.validate(&user).is_err());
}

#[test]
fn relaxed_custom_policy_accepts_weak_password() {
    let validator = Validator::new();
    let user = User::new("codestack", "user@example.com", "weak");

    let errors = validator.validate(&user).unwrap_err();
    assert_eq!(errors.for_field("password").count(), 1);

    validator.set_custom_password_rules(PasswordPolicy::relaxed());
    assert_eq!(validator.validate(&user), Ok(()));
}

#[rstest]
#[case::lowercase_only("password", "password must contain at least one digit")]
#[case::no_uppercase("password1", "password must contain at least one uppercase letter")]
#[case::no_lowercase("PASSWORD1", "password must contain at least one lowercase letter")]
#[case::no_special("Password1", "password must contain at least one special character")]
fn default_policy_reports_first_missing_class(#[case] password: &str, #[case] expected: &str) {
    let user = User::new("codestack", "user@example.com", password);
    let errors = Validator::new().validate(&user).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.to_string(), format!("password: {expected}"));
}

#[rstest]
#[case("abcdefghijk", "username: field must have a maximum length of 10 characters")]
#[case("ab", "username: field must have a minimum length of 3 characters")]
fn username_length_bounds(#[case] username: &str, #[case] expected: &str) {
    let user = User::new(username, "user@example.com", "Password123@#12");
    let errors = Validator::new().validate(&user).unwrap_err();
    assert_eq!(errors.messages(), [expected]);
}

#[test]
fn errors_render_as_json() {
    let user = User::new("codestack", "nope", "Password123@#12");
    let errors = Validator::new().validate(&user).unwrap_err();

    let json = errors.to_json_value();
    assert_eq!(json[0]["code"], "email");
    assert_eq!(json[0]["field"], "email");
    assert_eq!(json[0]["message"], "field must be a valid email address");
}

#[test]
fn non_record_root_is_rejected() {
    let errors = Validator::new()
        .validate_value(&42i32.as_field_value())
        .unwrap_err();
    assert_eq!(errors.to_string(), "unsupported type for validation: int");
}
