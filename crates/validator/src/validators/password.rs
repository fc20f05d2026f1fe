//! Password policy validator.
//!
//! A [`PasswordPolicy`] describes a minimum length and the character classes
//! a password must contain. [`Password`] checks a value against a policy and
//! reports the first requirement that fails.
//!
//! [`PasswordPolicy::resolve`] computes the effective policy for one field:
//! inline tag options override the validator-level policy, which overrides
//! the built-in default.

use serde::{Deserialize, Serialize};

use crate::foundation::{FieldValue, Rule, ValidationError};
use crate::tag::options::{parse_bool, split_pairs};

/// Characters accepted by the special-character requirement.
pub const SPECIAL_CHARS: &str = "~!@#$%^&*()-_+=<>?/[]{}|";

// ============================================================================
// PASSWORD POLICY
// ============================================================================

/// Minimum length and required character classes for a password.
///
/// The [`Default`] policy requires eight characters and every class.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::validators::PasswordPolicy;
///
/// let policy = PasswordPolicy::default().min_length(12).require_special_chars(false);
/// assert_eq!(policy.min_length, 12);
/// assert!(policy.require_digits);
/// assert!(!policy.require_special_chars);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum number of characters.
    pub min_length: usize,
    /// Require at least one ASCII digit.
    pub require_digits: bool,
    /// Require at least one ASCII uppercase letter.
    pub require_uppercase: bool,
    /// Require at least one ASCII lowercase letter.
    pub require_lowercase: bool,
    /// Require at least one character from [`SPECIAL_CHARS`].
    pub require_special_chars: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_digits: true,
            require_uppercase: true,
            require_lowercase: true,
            require_special_chars: true,
        }
    }
}

impl PasswordPolicy {
    /// Keys accepted in inline password options.
    pub const OPTION_KEYS: [&'static str; 5] = [
        "min_length",
        "require_digits",
        "require_uppercase",
        "require_lowercase",
        "require_special_chars",
    ];

    /// Whether `token` is a `key=value` pair with a password option key.
    #[must_use]
    pub fn is_option(token: &str) -> bool {
        token
            .split_once('=')
            .is_some_and(|(key, _)| Self::OPTION_KEYS.contains(&key.trim()))
    }

    /// A policy with no requirements at all.
    #[must_use]
    pub const fn relaxed() -> Self {
        Self {
            min_length: 0,
            require_digits: false,
            require_uppercase: false,
            require_lowercase: false,
            require_special_chars: false,
        }
    }

    /// Sets the minimum password length.
    #[must_use = "builder methods must be chained or built"]
    pub const fn min_length(mut self, len: usize) -> Self {
        self.min_length = len;
        self
    }

    /// Toggles the digit requirement.
    #[must_use = "builder methods must be chained or built"]
    pub const fn require_digits(mut self, on: bool) -> Self {
        self.require_digits = on;
        self
    }

    /// Toggles the uppercase requirement.
    #[must_use = "builder methods must be chained or built"]
    pub const fn require_uppercase(mut self, on: bool) -> Self {
        self.require_uppercase = on;
        self
    }

    /// Toggles the lowercase requirement.
    #[must_use = "builder methods must be chained or built"]
    pub const fn require_lowercase(mut self, on: bool) -> Self {
        self.require_lowercase = on;
        self
    }

    /// Toggles the special character requirement.
    #[must_use = "builder methods must be chained or built"]
    pub const fn require_special_chars(mut self, on: bool) -> Self {
        self.require_special_chars = on;
        self
    }

    /// Resolves the effective policy for one `password` rule invocation.
    ///
    /// * empty `options` and no `custom` policy: the default policy
    /// * otherwise: start from `custom` (or the default) and apply every
    ///   `key=value` pair in `options`
    ///
    /// Recognized keys are `min_length`, `require_digits`,
    /// `require_uppercase`, `require_lowercase`, and `require_special_chars`.
    /// Unknown keys are ignored. A value that does not convert leaves the
    /// setting unchanged. A part without `=` fails the whole parse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldguard_validator::validators::PasswordPolicy;
    ///
    /// let custom = PasswordPolicy::relaxed();
    /// let policy = PasswordPolicy::resolve("min_length=4,require_digits=true", Some(&custom)).unwrap();
    /// assert_eq!(policy, PasswordPolicy::relaxed().min_length(4).require_digits(true));
    ///
    /// assert!(PasswordPolicy::resolve("require_digits", None).is_err());
    /// ```
    pub fn resolve(
        options: &str,
        custom: Option<&PasswordPolicy>,
    ) -> Result<PasswordPolicy, PasswordOptionsError> {
        let mut policy = custom.copied().unwrap_or_default();
        if options.is_empty() {
            return Ok(policy);
        }

        let pairs = split_pairs(options).map_err(|part| PasswordOptionsError::MalformedPair {
            part: part.to_owned(),
        })?;

        for (key, value) in pairs {
            match key {
                "min_length" => {
                    if let Ok(n) = value.parse() {
                        policy.min_length = n;
                    }
                }
                "require_digits" => set_flag(&mut policy.require_digits, value),
                "require_uppercase" => set_flag(&mut policy.require_uppercase, value),
                "require_lowercase" => set_flag(&mut policy.require_lowercase, value),
                "require_special_chars" => set_flag(&mut policy.require_special_chars, value),
                _ => {}
            }
        }

        Ok(policy)
    }
}

fn set_flag(flag: &mut bool, value: &str) {
    if let Some(on) = parse_bool(value) {
        *flag = on;
    }
}

/// Failure to parse inline password options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordOptionsError {
    /// An option without a `=` separator.
    #[error("invalid password rule format: `{part}`")]
    MalformedPair {
        /// The offending option.
        part: String,
    },
}

impl PasswordOptionsError {
    /// The policy to fall back on when options could not be parsed.
    ///
    /// Always the built-in default; callers decide whether to use it.
    #[must_use]
    pub fn fallback(&self) -> PasswordPolicy {
        PasswordPolicy::default()
    }
}

// ============================================================================
// PASSWORD VALIDATOR
// ============================================================================

/// Validates a password against a [`PasswordPolicy`].
///
/// Checks run in order (length, digit, uppercase, lowercase, special) and
/// the first failure is returned. Disabled requirements are skipped.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::foundation::{AsFieldValue, Rule};
/// use fieldguard_validator::validators::{password, PasswordPolicy};
///
/// let rule = password(PasswordPolicy::default());
/// assert!(rule.check(&"Password123@#12".as_field_value()).is_ok());
///
/// let err = rule.check(&"weak".as_field_value()).unwrap_err();
/// assert_eq!(err.message, "password must have a minimum length of 8 characters");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Password {
    policy: PasswordPolicy,
}

impl Password {
    /// Creates a password validator for the given policy.
    #[must_use]
    pub const fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    /// The policy this validator enforces.
    #[must_use]
    pub const fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    fn check_str(&self, password: &str) -> Result<(), ValidationError> {
        let policy = &self.policy;

        let len = password.chars().count();
        if len < policy.min_length {
            return Err(ValidationError::new(
                "password",
                format!(
                    "password must have a minimum length of {} characters",
                    policy.min_length
                ),
            )
            .with_param("requirement", "min_length")
            .with_param("min", policy.min_length.to_string())
            .with_param("actual", len.to_string()));
        }

        let requirements: [(bool, &'static str, fn(char) -> bool, &'static str); 4] = [
            (
                policy.require_digits,
                "digit",
                |c| c.is_ascii_digit(),
                "password must contain at least one digit",
            ),
            (
                policy.require_uppercase,
                "uppercase",
                |c| c.is_ascii_uppercase(),
                "password must contain at least one uppercase letter",
            ),
            (
                policy.require_lowercase,
                "lowercase",
                |c| c.is_ascii_lowercase(),
                "password must contain at least one lowercase letter",
            ),
            (
                policy.require_special_chars,
                "special",
                |c| SPECIAL_CHARS.contains(c),
                "password must contain at least one special character",
            ),
        ];

        for (enabled, requirement, matches, message) in requirements {
            if enabled && !password.chars().any(matches) {
                return Err(
                    ValidationError::new("password", message).with_param("requirement", requirement)
                );
            }
        }

        Ok(())
    }
}

impl Rule for Password {
    fn check(&self, value: &FieldValue<'_>) -> Result<(), ValidationError> {
        match value.present() {
            None => Ok(()),
            Some(FieldValue::Str(s)) => self.check_str(s),
            Some(other) => Err(ValidationError::new(
                "password",
                "invalid field type for password validation",
            )
            .with_param("kind", other.kind().as_str())),
        }
    }
}

/// Creates a password validator.
#[must_use]
pub const fn password(policy: PasswordPolicy) -> Password {
    Password::new(policy)
}

// ============================================================================
// TESTS
// ============================================================================
