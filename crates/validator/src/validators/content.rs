//! String content validators

use std::sync::LazyLock;

use crate::foundation::{FieldValue, Rule, ValidationError};

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

/// Validates email shape: `local@domain.tld` with a tld of two or more letters.
#[derive(Debug, Clone)]
pub struct Email {
    pattern: regex::Regex,
}

impl Email {
    /// Creates an email validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for Email {
    fn check(&self, value: &FieldValue<'_>) -> Result<(), ValidationError> {
        match value.present() {
            None => Ok(()),
            Some(FieldValue::Str(s)) if self.pattern.is_match(s) => Ok(()),
            Some(FieldValue::Str(_)) => Err(ValidationError::new(
                "email",
                "field must be a valid email address",
            )),
            Some(other) => Err(ValidationError::unsupported_type("Email", other.kind())),
        }
    }
}

/// Creates an email validator.
#[must_use]
pub fn email() -> Email {
    Email::new()
}

// ============================================================================
// TESTS
// ============================================================================
