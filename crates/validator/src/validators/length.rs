//! Length validators
//!
//! [`MinLength`] and [`MaxLength`] measure strings in Unicode scalar values
//! (chars) and sequences by element count. Any other kind is a hard
//! `unsupported_type` failure, never a silent pass. A present optional is
//! measured through; an absent one passes.

use crate::foundation::{FieldValue, Kind, Rule, ValidationError};

/// Result of measuring a field value.
enum Measure {
    Len(usize),
    Absent,
    Unsupported(Kind),
}

fn measure(value: &FieldValue<'_>) -> Measure {
    match value.present() {
        None => Measure::Absent,
        Some(FieldValue::Str(s)) => Measure::Len(s.chars().count()),
        Some(FieldValue::Seq(len)) => Measure::Len(*len),
        Some(other) => Measure::Unsupported(other.kind()),
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Validates that a string or sequence has at least `min` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinLength {
    /// Minimum length (inclusive).
    pub min: usize,
}

impl MinLength {
    /// Creates a minimum length validator.
    #[must_use]
    pub const fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Rule for MinLength {
    fn check(&self, value: &FieldValue<'_>) -> Result<(), ValidationError> {
        match measure(value) {
            Measure::Len(len) if len < self.min => Err(ValidationError::min_length(self.min, len)),
            Measure::Len(_) | Measure::Absent => Ok(()),
            Measure::Unsupported(kind) => Err(ValidationError::unsupported_type("MinLength", kind)),
        }
    }
}

/// Creates a minimum length validator.
#[must_use]
pub const fn min_length(min: usize) -> MinLength {
    MinLength::new(min)
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Validates that a string or sequence has at most `max` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxLength {
    /// Maximum length (inclusive).
    pub max: usize,
}

impl MaxLength {
    /// Creates a maximum length validator.
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Rule for MaxLength {
    fn check(&self, value: &FieldValue<'_>) -> Result<(), ValidationError> {
        match measure(value) {
            Measure::Len(len) if len > self.max => Err(ValidationError::max_length(self.max, len)),
            Measure::Len(_) | Measure::Absent => Ok(()),
            Measure::Unsupported(kind) => Err(ValidationError::unsupported_type("MaxLength", kind)),
        }
    }
}

/// Creates a maximum length validator.
#[must_use]
pub const fn max_length(max: usize) -> MaxLength {
    MaxLength::new(max)
}

// ============================================================================
// TESTS
// ============================================================================
