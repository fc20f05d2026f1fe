//! Presence validator
//!
//! [`Required`] rejects the zero value of every kind: empty strings and
//! collections, absent optionals, `0`, `0.0`, `false`, and records whose
//! fields are all zero.
//!
//! # Examples
//!
//! ```rust
//! use fieldguard_validator::foundation::{AsFieldValue, Rule};
//! use fieldguard_validator::validators::required;
//!
//! assert!(required().check(&"hello".as_field_value()).is_ok());
//! assert!(required().check(&"".as_field_value()).is_err());
//! assert!(required().check(&None::<i32>.as_field_value()).is_err());
//! ```

use crate::foundation::{FieldValue, Rule, ValidationError};

/// Validates that a value is not the zero value of its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Required;

impl Rule for Required {
    fn check(&self, value: &FieldValue<'_>) -> Result<(), ValidationError> {
        if !value.is_zero() {
            return Ok(());
        }

        let message = match value {
            FieldValue::Str(_) | FieldValue::Seq(_) | FieldValue::Map(_) => {
                "field is required and must not be empty"
            }
            FieldValue::Optional(_) => "field is required and must not be nil",
            _ => "field is required and must not be zero value",
        };

        Err(ValidationError::new("required", message).with_param("kind", value.kind().as_str()))
    }
}

/// Creates a `Required` validator.
#[must_use]
pub const fn required() -> Required {
    Required
}
