//! Error types for validation failures
//!
//! A [`ValidationError`] is one leaf failure: a machine-readable code, a
//! human-readable message, and an optional field path. A
//! [`ValidationErrors`] is the aggregate returned by a validation pass.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single, optionally field-qualified validation failure.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("required", "field is required and must not be empty")
///     .with_field("username");
///
/// assert_eq!(
///     error.to_string(),
///     "username: field is required and must not be empty"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "min_length", "invalid_options"
    pub code: Cow<'static, str>,

    /// Human-readable message, without the field path.
    pub message: Cow<'static, str>,

    /// Dotted field path, outermost record first.
    ///
    /// Examples: "email", "address.city"
    pub field: Option<Cow<'static, str>>,

    /// Parameters of the failed rule, as ordered key-value pairs.
    ///
    /// Example: `[("min", "5"), ("actual", "3")]`
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Re-roots this error under a parent field.
    ///
    /// `city` becomes `address.city`; an error without a field becomes
    /// qualified by the parent alone.
    #[must_use = "builder methods must be chained or built"]
    pub fn under(mut self, parent: &str) -> Self {
        self.field = Some(match self.field.take() {
            Some(field) => Cow::Owned(format!("{parent}.{field}")),
            None => Cow::Owned(parent.to_owned()),
        });
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON value.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new(
            "min_length",
            format!("field must have a minimum length of {min} characters"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new(
            "max_length",
            format!("field must have a maximum length of {max} characters"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates an "unsupported_type" error for a rule applied to a kind it
    /// cannot inspect.
    pub fn unsupported_type(rule: &'static str, kind: impl fmt::Display) -> Self {
        let kind = kind.to_string();
        Self::new(
            "unsupported_type",
            format!("unsupported type for {rule} validation: {kind}"),
        )
        .with_param("rule", rule)
        .with_param("kind", kind)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// The aggregate outcome of one validation pass.
///
/// Entries keep their append order. Rendering joins each entry's
/// [`Display`](fmt::Display) output with newlines. No deduplication.
///
/// A validation pass never returns an empty aggregate as a failure: use
/// [`into_result`](Self::into_result) to turn an empty collection into
/// `Ok(())`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends an error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Absorbs every entry of `other`, preserving their relative order.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Re-roots every entry under `parent`.
    #[must_use]
    pub fn under(self, parent: &str) -> Self {
        self.errors.into_iter().map(|e| e.under(parent)).collect()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the errors in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Rendered messages, one per entry.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Returns the errors recorded for a field path.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors
            .iter()
            .filter(move |e| e.field.as_deref() == Some(field))
    }

    /// `Ok(())` when empty, `Err(self)` otherwise.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Converts the collection to a JSON array.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(self.errors.iter().map(ValidationError::to_json_value).collect())
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
