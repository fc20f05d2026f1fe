//! Built-in rules
//!
//! Every rule a rule specification can name has a typed counterpart
//! here, usable directly through the [`Rule`](crate::foundation::Rule) trait.
//!
//! | Tag          | Rule                      |
//! |--------------|---------------------------|
//! | `required`   | [`Required`]              |
//! | `min_length` | [`MinLength`]             |
//! | `max_length` | [`MaxLength`]             |
//! | `email`      | [`Email`]                 |
//! | `password`   | [`Password`]              |
//!
//! # Examples
//!
//! ```rust
//! use fieldguard_validator::foundation::{AsFieldValue, Rule};
//! use fieldguard_validator::validators::*;
//!
//! let username = String::from("codestack");
//! let value = username.as_field_value();
//! assert!(required().check(&value).is_ok());
//! assert!(min_length(3).check(&value).is_ok());
//! assert!(max_length(10).check(&value).is_ok());
//! ```

pub mod content;
pub mod length;
pub mod nullable;
pub mod password;

pub use content::{Email, email};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use nullable::{Required, required};
pub use password::{Password, PasswordOptionsError, PasswordPolicy, SPECIAL_CHARS, password};
