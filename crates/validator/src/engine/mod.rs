//! The validation engine
//!
//! [`Validator`] owns the configuration and the validator-level password
//! policy, and runs validation passes over [`Record`]s.

mod dispatch;
mod traversal;

use parking_lot::Mutex;

use crate::config::ValidatorConfig;
use crate::foundation::{FieldValue, Record, ValidationError, ValidationErrors};
use crate::validators::PasswordPolicy;

use dispatch::Dispatcher;
use traversal::Traversal;

/// Validates records against the rule specifications of their fields.
///
/// A validator is cheap to create, `Send + Sync`, and reusable for any number
/// of validations. Its password policy can be replaced at any time through
/// a shared reference; each validation pass reads the policy once when it
/// starts.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::{Validator, record};
///
/// record! {
///     pub struct User {
///         #[rules = "required,min_length=3,max_length=10"]
///         pub username: String,
///         #[rules = "required,email"]
///         pub email: String,
///     }
/// }
///
/// let validator = Validator::new();
///
/// let ok = User { username: "codestack".into(), email: "user@example.com".into() };
/// assert!(validator.validate(&ok).is_ok());
///
/// let bad = User { username: "codestack".into(), email: "invalid-email".into() };
/// let errors = validator.validate(&bad).unwrap_err();
/// assert_eq!(errors.to_string(), "email: field must be a valid email address");
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    config: ValidatorConfig,
    custom_password: Mutex<Option<PasswordPolicy>>,
}

impl Validator {
    /// Creates a validator with the default configuration and no custom
    /// password policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator from a configuration.
    ///
    /// `config.password`, if set, becomes the initial validator-level
    /// password policy.
    #[must_use]
    pub fn with_config(config: ValidatorConfig) -> Self {
        let custom_password = Mutex::new(config.password);
        Self {
            config,
            custom_password,
        }
    }

    /// The configuration this validator was built with.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Replaces the validator-level password policy.
    ///
    /// Applies to validations started after this call; passes already
    /// running keep the policy they started with.
    pub fn set_custom_password_rules(&self, policy: PasswordPolicy) {
        tracing::debug!(?policy, "custom password rules set");
        *self.custom_password.lock() = Some(policy);
    }

    /// Drops the validator-level password policy, restoring the default.
    pub fn clear_custom_password_rules(&self) {
        *self.custom_password.lock() = None;
    }

    /// The validator-level password policy, if one is set.
    #[must_use]
    pub fn custom_password_rules(&self) -> Option<PasswordPolicy> {
        *self.custom_password.lock()
    }

    /// Validates every field of `record`, including nested records.
    ///
    /// Returns `Ok(())` when every rule passes, otherwise every failure in
    /// one [`ValidationErrors`] (never empty).
    pub fn validate(&self, record: &dyn Record) -> Result<(), ValidationErrors> {
        let _span = tracing::debug_span!("validate", record = record.type_name()).entered();

        let custom_password = self.custom_password_rules();
        let traversal = Traversal {
            dispatcher: Dispatcher {
                custom_password: custom_password.as_ref(),
                unknown_rules: self.config.unknown_rules,
            },
            fan_out: self.config.fan_out,
        };

        let errors = traversal.record(record);
        tracing::debug!(errors = errors.len(), "validation finished");
        errors.into_result()
    }

    /// Validates an arbitrary value.
    ///
    /// Only records can be validated; any other kind yields a single
    /// `unsupported type for validation: <kind>` error.
    pub fn validate_value(&self, value: &FieldValue<'_>) -> Result<(), ValidationErrors> {
        match value {
            FieldValue::Record(record) => self.validate(*record),
            other => Err(ValidationError::new(
                "unsupported_type",
                format!("unsupported type for validation: {}", other.kind()),
            )
            .with_param("kind", other.kind().as_str())
            .into()),
        }
    }
}
