//! Core validation types and traits
//!
//! This module contains the building blocks every other module works with:
//!
//! - **Values**: [`FieldValue`], [`Kind`], [`AsFieldValue`]
//! - **Records**: [`Record`], [`FieldDescriptor`]
//! - **Rules**: [`Rule`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! # Examples
//!
//! ```rust
//! use fieldguard_validator::foundation::{AsFieldValue, Rule};
//! use fieldguard_validator::validators::min_length;
//!
//! let name = String::from("codestack");
//! assert!(min_length(3).check(&name.as_field_value()).is_ok());
//! ```

pub mod error;
pub mod traits;
pub mod value;

pub use error::{ValidationError, ValidationErrors};
pub use traits::Rule;
pub use value::{AsFieldValue, FieldDescriptor, FieldValue, Kind, Record};

