//! Rule option handling.

use fieldguard_validator::prelude::*;
use pretty_assertions::assert_eq;

record! {
    pub struct BadBound {
        #[rules = "required,min_length=abc"]
        pub username: String,
    }
}

record! {
    pub struct NegativeBound {
        #[rules = "max_length=-1"]
        pub username: String,
    }
}

record! {
    pub struct InlinePolicy {
        #[rules = "required,password=min_length=4,require_digits=false,require_uppercase=false,require_lowercase=false,require_special_chars=false"]
        pub pin: String,
    }
}

record! {
    pub struct PartialPolicy {
        #[rules = "password=min_length=4"]
        pub secret: String,
    }
}

record! {
    pub struct MalformedPolicy {
        #[rules = "password=require_digits"]
        pub secret: String,
    }
}

record! {
    pub struct TrailingRules {
        #[rules = "password=min_length=4,required"]
        pub secret: String,
    }
}

record! {
    pub struct EmptyPasswordOptions {
        #[rules = "password=,required"]
        pub secret: String,
    }
}

record! {
    pub struct Unknown {
        #[rules = "required,uuid"]
        pub id: String,
    }
}

record! {
    pub struct Untyped {
        #[rules = "min_length=2"]
        pub count: u32,
        #[rules = "email"]
        pub flag: bool,
    }
}

record! {
    pub struct Optionals {
        #[rules = "min_length=3,email"]
        pub contact: Option<String>,
    }
}

#[test]
fn invalid_length_option_replaces_the_check() {
    let errors = Validator::new()
        .validate(&BadBound { username: "codestack".into() })
        .unwrap_err();
    assert_eq!(errors.to_string(), "username: invalid min_length options: abc");
}

#[test]
fn negative_length_option_is_invalid() {
    let errors = Validator::new()
        .validate(&NegativeBound { username: "x".into() })
        .unwrap_err();
    assert_eq!(errors.to_string(), "username: invalid max_length options: -1");
}

#[test]
fn inline_password_policy_overrides_default() {
    assert!(Validator::new().validate(&InlinePolicy { pin: "abcd".into() }).is_ok());

    let errors = Validator::new()
        .validate(&InlinePolicy { pin: "abc".into() })
        .unwrap_err();
    assert_eq!(
        errors.to_string(),
        "pin: password must have a minimum length of 4 characters"
    );
}

#[test]
fn inline_options_layer_over_custom_policy() {
    let validator = Validator::new();
    validator.set_custom_password_rules(PasswordPolicy::relaxed().min_length(10));

    assert!(validator.validate(&PartialPolicy { secret: "abcd".into() }).is_ok());
}

#[test]
fn partial_inline_options_keep_default_requirements() {
    let errors = Validator::new()
        .validate(&PartialPolicy { secret: "abcd".into() })
        .unwrap_err();
    assert_eq!(
        errors.to_string(),
        "secret: password must contain at least one digit"
    );
}

#[test]
fn malformed_password_options_are_reported() {
    let errors = Validator::new()
        .validate(&MalformedPolicy { secret: "anything".into() })
        .unwrap_err();
    assert_eq!(
        errors.to_string(),
        "secret: invalid password options: require_digits"
    );
}

#[test]
fn rules_after_password_options_still_run() {
    let validator = Validator::with_config(ValidatorConfig::new().with_fan_out(FanOut::Sequential));

    let errors = validator
        .validate(&TrailingRules { secret: String::new() })
        .unwrap_err();
    assert_eq!(
        errors.messages(),
        [
            "secret: password must have a minimum length of 4 characters",
            "secret: field is required and must not be empty",
        ]
    );

    let errors = validator
        .validate(&TrailingRules { secret: "abcd".into() })
        .unwrap_err();
    assert_eq!(
        errors.to_string(),
        "secret: password must contain at least one digit"
    );
}

#[test]
fn empty_password_options_mean_default_policy() {
    let validator = Validator::with_config(ValidatorConfig::new().with_fan_out(FanOut::Sequential));

    let errors = validator
        .validate(&EmptyPasswordOptions { secret: String::new() })
        .unwrap_err();
    assert_eq!(
        errors.messages(),
        [
            "secret: password must have a minimum length of 8 characters",
            "secret: field is required and must not be empty",
        ]
    );

    assert!(validator
        .validate(&EmptyPasswordOptions { secret: "Password123@#12".into() })
        .is_ok());
}

#[test]
fn unknown_rules_follow_configuration() {
    let record = Unknown { id: "abc".into() };
    assert!(Validator::new().validate(&record).is_ok());

    let errors = Validator::with_config(ValidatorConfig::strict())
        .validate(&record)
        .unwrap_err();
    assert_eq!(errors.to_string(), "id: unknown validation rule: uuid");
}

#[test]
fn rules_on_unsupported_kinds_report_the_kind() {
    let errors = Validator::with_config(ValidatorConfig::new().with_fan_out(FanOut::Sequential))
        .validate(&Untyped { count: 5, flag: true })
        .unwrap_err();
    assert_eq!(
        errors.messages(),
        [
            "count: unsupported type for MinLength validation: uint",
            "flag: unsupported type for Email validation: bool",
        ]
    );
}

#[test]
fn absent_optionals_pass_and_present_ones_are_checked() {
    let validator = Validator::new();
    assert!(validator.validate(&Optionals { contact: None }).is_ok());
    assert!(validator
        .validate(&Optionals { contact: Some("user@example.com".into()) })
        .is_ok());

    let errors = validator
        .validate(&Optionals { contact: Some("ab".into()) })
        .unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn strict_parse_flags_problems_up_front() {
    assert!(RuleSpec::parse_strict("required,min_length=3").is_ok());
    assert_eq!(RuleSpec::parse_strict("password=min_length=4,required").map(|s| s.len()), Ok(2));
    assert_eq!(
        RuleSpec::parse_strict("required,uuid").unwrap_err().to_string(),
        "unknown validation rule: uuid"
    );
    assert_eq!(
        RuleSpec::parse_strict("min_length=abc").unwrap_err().to_string(),
        "invalid min_length options: abc"
    );
}
