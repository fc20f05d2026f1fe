//! Prelude module for convenient imports.
//!
//! ```rust
//! use fieldguard_validator::prelude::*;
//!
//! let validator = Validator::with_config(ValidatorConfig::strict());
//! validator.set_custom_password_rules(PasswordPolicy::default().min_length(12));
//! ```

pub use crate::config::{FanOut, UnknownRules, ValidatorConfig};
pub use crate::engine::Validator;
pub use crate::foundation::{
    AsFieldValue, FieldDescriptor, FieldValue, Kind, Record, Rule, ValidationError,
    ValidationErrors,
};
pub use crate::record;
pub use crate::tag::{RuleInvocation, RuleKind, RuleSpec, TagError};
pub use crate::validators::{
    Email, MaxLength, MinLength, Password, PasswordPolicy, Required, email, max_length,
    min_length, password, required,
};
