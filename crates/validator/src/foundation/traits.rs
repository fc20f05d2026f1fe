//! Core traits for the rule system
//!
//! Every built-in rule implements [`Rule`]. Rules are pure: they look at a
//! single [`FieldValue`] and either accept it or explain why not.

use crate::foundation::{FieldValue, ValidationError};

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A stateless check applied to one field value.
///
/// Errors returned by a rule are not field-qualified; the engine attaches
/// the field path.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::foundation::{FieldValue, Rule, ValidationError};
///
/// struct NonNegative;
///
/// impl Rule for NonNegative {
///     fn check(&self, value: &FieldValue<'_>) -> Result<(), ValidationError> {
///         match value {
///             FieldValue::Int(n) if *n < 0 => {
///                 Err(ValidationError::new("non_negative", "field must not be negative"))
///             }
///             _ => Ok(()),
///         }
///     }
/// }
///
/// assert!(NonNegative.check(&FieldValue::Int(3)).is_ok());
/// assert!(NonNegative.check(&FieldValue::Int(-3)).is_err());
/// ```
pub trait Rule {
    /// Checks the value.
    ///
    /// * `Ok(())` if the value satisfies the rule
    /// * `Err(ValidationError)` with the failure reason otherwise
    fn check(&self, value: &FieldValue<'_>) -> Result<(), ValidationError>;
}

impl<R: Rule + ?Sized> Rule for &R {
    fn check(&self, value: &FieldValue<'_>) -> Result<(), ValidationError> {
        (**self).check(value)
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn check(&self, value: &FieldValue<'_>) -> Result<(), ValidationError> {
        (**self).check(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
