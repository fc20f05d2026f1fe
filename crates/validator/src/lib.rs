//! # fieldguard-validator
//!
//! Declarative struct validation driven by rule specifications attached to
//! fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldguard_validator::prelude::*;
//!
//! record! {
//!     pub struct User {
//!         #[rules = "required,min_length=3,max_length=10"]
//!         pub username: String,
//!         #[rules = "required,email"]
//!         pub email: String,
//!         #[rules = "required,password"]
//!         pub password: String,
//!     }
//! }
//!
//! let user = User {
//!     username: "codestack".into(),
//!     email: "user@example.com".into(),
//!     password: "Password123@#12".into(),
//! };
//!
//! assert!(Validator::new().validate(&user).is_ok());
//! ```
//!
//! ## Rule Specifications
//!
//! A comma-separated list of `name` or `name=options` tokens. See [`tag`].
//!
//! - `required`
//! - `email`
//! - `min_length=<n>`, `max_length=<n>`
//! - `password[=<key=value,...>]` with keys `min_length`, `require_digits`,
//!   `require_uppercase`, `require_lowercase`, `require_special_chars`
//!
//! ## Errors
//!
//! Validation never stops at the first failure. Every field and rule is
//! checked, and all failures come back in one
//! [`ValidationErrors`](foundation::ValidationErrors), rendered one per line
//! as `field.path: message`.

pub mod config;
pub mod engine;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod tag;
pub mod validators;

pub use engine::Validator;
