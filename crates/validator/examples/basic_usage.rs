//! Basic usage example for fieldguard-validator
//!
//! Run with `RUST_LOG=fieldguard_validator=trace` to see rule dispatch.

use fieldguard_validator::prelude::*;
use tracing_subscriber::EnvFilter;

record! {
    #[derive(Debug)]
    struct User {
        #[rules = "required,min_length=3,max_length=10"]
        #[json = "username"]
        username: String,
        #[rules = "required,email"]
        #[json = "email"]
        email: String,
        #[rules = "required,password"]
        #[json = "password"]
        password: String,
    }
}

record! {
    #[derive(Debug)]
    struct Address {
        #[rules = "required"]
        city: String,
        #[rules = "required"]
        state: String,
    }
}

record! {
    #[derive(Debug)]
    struct Profile {
        #[rules = "required"]
        name: String,
        #[rules = "required"]
        address: Address,
    }
}

fn report(label: &str, outcome: Result<(), ValidationErrors>) {
    match outcome {
        Ok(()) => println!("✓ {label}: valid"),
        Err(errors) => {
            println!("✗ {label}: {} error(s)", errors.len());
            for error in &errors {
                println!("    {error}");
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let validator = Validator::new();

    let valid = User {
        username: "codestack".into(),
        email: "user@example.com".into(),
        password: "Password123@#12".into(),
    };
    report("valid user", validator.validate(&valid));

    let invalid = User {
        username: "ab".into(),
        email: "invalid-email".into(),
        password: "weak".into(),
    };
    report("invalid user", validator.validate(&invalid));

    validator.set_custom_password_rules(PasswordPolicy::relaxed().min_length(4));
    report("invalid user, relaxed passwords", validator.validate(&invalid));
    validator.clear_custom_password_rules();

    let profile = Profile {
        name: "John Doe".into(),
        address: Address {
            city: String::new(),
            state: "New York".into(),
        },
    };
    report("profile", validator.validate(&profile));
}
