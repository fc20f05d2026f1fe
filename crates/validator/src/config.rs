//! Validator configuration
//!
//! [`ValidatorConfig`] is owned by a [`Validator`](crate::Validator) and fixed
//! at construction. It can be built in code or deserialized; every field has
//! a default, so a partial document is fine.
//!
//! ```rust
//! use fieldguard_validator::config::{FanOut, UnknownRules, ValidatorConfig};
//!
//! let config = ValidatorConfig::from_json_str(
//!     r#"{ "fan_out": "sequential", "password": { "min_length": 12 } }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.fan_out, FanOut::Sequential);
//! assert_eq!(config.unknown_rules, UnknownRules::Ignore);
//! assert_eq!(config.password.unwrap().min_length, 12);
//! ```

use serde::{Deserialize, Serialize};

use crate::validators::PasswordPolicy;

/// How sibling fields of one record are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanOut {
    /// One scoped thread per field, joined before the record completes.
    #[default]
    Parallel,
    /// Fields are checked one after another on the calling thread.
    Sequential,
}

/// What to do with a rule name that matches no rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownRules {
    /// Skip the invocation silently.
    #[default]
    Ignore,
    /// Report `unknown validation rule: <name>` for the field.
    Reject,
}

/// Engine settings for a [`Validator`](crate::Validator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Field scheduling.
    pub fan_out: FanOut,
    /// Handling of unknown rule names.
    pub unknown_rules: UnknownRules,
    /// Initial validator-level password policy.
    pub password: Option<PasswordPolicy>,
}

impl ValidatorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration that reports unknown rule names.
    #[must_use]
    pub fn strict() -> Self {
        Self::default().with_unknown_rules(UnknownRules::Reject)
    }

    /// Sets field scheduling.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_fan_out(mut self, fan_out: FanOut) -> Self {
        self.fan_out = fan_out;
        self
    }

    /// Sets handling of unknown rule names.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_unknown_rules(mut self, unknown_rules: UnknownRules) -> Self {
        self.unknown_rules = unknown_rules;
        self
    }

    /// Sets the initial validator-level password policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_password(mut self, policy: PasswordPolicy) -> Self {
        self.password = Some(policy);
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Failure to load a [`ValidatorConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid configuration JSON.
    #[error("invalid validator configuration: {0}")]
    Json(#[from] serde_json::Error),
}
