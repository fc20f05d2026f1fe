//! Property-based tests.

use fieldguard_validator::prelude::*;
use proptest::prelude::*;

use crate::{User, sorted_messages};

proptest! {
    #[test]
    fn validation_is_idempotent(
        username in ".{0,14}",
        email in "[a-z@.]{0,20}",
        password in ".{0,16}",
    ) {
        let user = User::new(&username, &email, &password);
        let validator = Validator::new();

        let first = validator.validate(&user);
        let second = validator.validate(&user);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn fan_out_does_not_change_the_result_set(
        username in ".{0,14}",
        email in "[a-z@.]{0,20}",
        password in ".{0,16}",
    ) {
        let user = User::new(&username, &email, &password);
        let parallel = Validator::new().validate(&user);
        let sequential = Validator::with_config(ValidatorConfig::new().with_fan_out(FanOut::Sequential))
            .validate(&user);

        match (parallel, sequential) {
            (Ok(()), Ok(())) => {}
            (Err(p), Err(s)) => prop_assert_eq!(sorted_messages(&p), sorted_messages(&s)),
            (p, s) => prop_assert!(false, "outcomes differ: {:?} vs {:?}", p, s),
        }
    }

    #[test]
    fn one_message_per_failing_rule(username in ".{0,14}") {
        let user = User::new(&username, "user@example.com", "Password123@#12");
        let len = username.chars().count();

        let expected = usize::from(username.is_empty())
            + usize::from(len < 3)
            + usize::from(len > 10);
        let actual = Validator::new().validate(&user).err().map_or(0, |e| e.len());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn min_length_matches_char_count(s in ".{0,20}", min in 0usize..20) {
        let outcome = min_length(min).check(&s.as_field_value());
        prop_assert_eq!(outcome.is_ok(), s.chars().count() >= min);
    }
}
