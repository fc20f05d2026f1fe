//! Nested record validation and field paths.

use fieldguard_validator::prelude::*;
use pretty_assertions::assert_eq;

record! {
    #[derive(Debug, Clone, Default)]
    pub struct Address {
        #[rules = "required"]
        pub city: String,
        #[rules = "required"]
        pub state: String,
    }
}

record! {
    #[derive(Debug, Clone, Default)]
    pub struct Profile {
        #[rules = "required"]
        pub name: String,
        #[rules = "required"]
        pub address: Address,
    }
}

record! {
    #[derive(Debug, Clone, Default)]
    pub struct Account {
        #[rules = "required,email"]
        pub login: String,
        pub profile: Profile,
    }
}

fn profile(name: &str, city: &str, state: &str) -> Profile {
    Profile {
        name: name.into(),
        address: Address {
            city: city.into(),
            state: state.into(),
        },
    }
}

#[test]
fn nested_failure_is_path_qualified() {
    let errors = Validator::new()
        .validate(&profile("John Doe", "", "New York"))
        .unwrap_err();
    assert_eq!(
        errors.to_string(),
        "address.city: field is required and must not be empty"
    );
}

#[test]
fn valid_nested_record_passes() {
    assert!(Validator::new()
        .validate(&profile("John Doe", "Albany", "New York"))
        .is_ok());
}

#[test]
fn zero_nested_record_fails_required_and_recurses() {
    let errors = Validator::new().validate(&profile("John Doe", "", "")).unwrap_err();

    let mut messages = errors.messages();
    messages.sort();
    assert_eq!(
        messages,
        [
            "address.city: field is required and must not be empty",
            "address.state: field is required and must not be empty",
            "address: field is required and must not be zero value",
        ]
    );
}

#[test]
fn untagged_record_field_is_still_traversed() {
    let account = Account {
        login: "user@example.com".into(),
        profile: profile("", "Albany", ""),
    };
    let errors = Validator::with_config(ValidatorConfig::new().with_fan_out(FanOut::Sequential))
        .validate(&account)
        .unwrap_err();

    assert_eq!(
        errors.messages(),
        [
            "profile.name: field is required and must not be empty",
            "profile.address.state: field is required and must not be empty",
        ]
    );
}
