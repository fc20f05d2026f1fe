//! Fan-out behaviour and shared validators.

use std::sync::Arc;
use std::thread;

use fieldguard_validator::prelude::*;
use pretty_assertions::assert_eq;

use crate::{User, sorted_messages};

record! {
    pub struct Wide {
        #[rules = "required"] pub a: String,
        #[rules = "min_length=2"] pub b: String,
        #[rules = "max_length=1"] pub c: String,
        #[rules = "email"] pub d: String,
        #[rules = "password"] pub e: String,
        #[rules = "required"] pub f: Vec<u8>,
        #[rules = "required"] pub g: Option<u8>,
        #[rules = "required"] pub h: i64,
    }
}

fn wide() -> Wide {
    Wide {
        a: String::new(),
        b: "x".into(),
        c: "xyz".into(),
        d: "d".into(),
        e: "e".into(),
        f: Vec::new(),
        g: None,
        h: 0,
    }
}

#[test]
fn parallel_and_sequential_agree() {
    let parallel = Validator::new().validate(&wide()).unwrap_err();
    let sequential = Validator::with_config(ValidatorConfig::new().with_fan_out(FanOut::Sequential))
        .validate(&wide())
        .unwrap_err();

    assert_eq!(parallel.len(), 8);
    assert_eq!(sorted_messages(&parallel), sorted_messages(&sequential));
}

#[test]
fn parallel_order_is_declaration_order() {
    let errors = Validator::new().validate(&wide()).unwrap_err();
    let fields: Vec<_> = errors.iter().filter_map(|e| e.field.as_deref()).collect();
    assert_eq!(fields, ["a", "b", "c", "d", "e", "f", "g", "h"]);
}

#[test]
fn shared_validator_across_threads() {
    let validator = Arc::new(Validator::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let validator = Arc::clone(&validator);
            thread::spawn(move || {
                let user = if i % 2 == 0 {
                    User::new("codestack", "user@example.com", "Password123@#12")
                } else {
                    User::new("ab", "invalid-email", "weak")
                };
                validator.validate(&user).map_err(|e| e.len())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let outcome = handle.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(outcome, Ok(()));
        } else {
            assert_eq!(outcome, Err(3));
        }
    }
}

#[test]
fn policy_changes_race_safely_with_validation() {
    let validator = Validator::new();
    let user = User::new("codestack", "user@example.com", "weak");

    thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..100 {
                if i % 2 == 0 {
                    validator.set_custom_password_rules(PasswordPolicy::relaxed());
                } else {
                    validator.clear_custom_password_rules();
                }
            }
        });
        for _ in 0..100 {
            if let Err(errors) = validator.validate(&user) {
                assert_eq!(
                    errors.to_string(),
                    "password: password must have a minimum length of 8 characters"
                );
            }
        }
    });
}
