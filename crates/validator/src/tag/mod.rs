//! Rule specification mini-language
//!
//! A rule specification is a comma-separated list of tokens, each either
//! `name` or `name=options`:
//!
//! ```text
//! required,min_length=3,max_length=10
//! required,email
//! required,password=min_length=6,require_special_chars=false
//! ```
//!
//! Each token is split on its first `=`. A `password=` token also takes
//! the tokens after it that are password options (`min_length=..`,
//! `require_*=..`); the first token that is not one starts a new rule.
//! `password=` with nothing after the `=` means no options.
//!
//! [`RuleSpec::parse`] is lenient: it never fails and leaves unknown rule
//! names for the engine to ignore or reject. [`RuleSpec::parse_strict`]
//! reports unknown rules and malformed options up front, for checking
//! specifications when records are declared.

pub mod options;

use std::fmt;
use std::str::FromStr;

use crate::foundation::ValidationError;
use crate::validators::PasswordPolicy;

// ============================================================================
// RULE KIND
// ============================================================================

/// Every rule the engine can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `required`
    Required,
    /// `email`
    Email,
    /// `min_length=<n>`
    MinLength,
    /// `max_length=<n>`
    MaxLength,
    /// `password[=<options>]`
    Password,
}

impl RuleKind {
    /// All rule kinds.
    pub const ALL: [RuleKind; 5] = [
        RuleKind::Required,
        RuleKind::Email,
        RuleKind::MinLength,
        RuleKind::MaxLength,
        RuleKind::Password,
    ];

    /// The name used in rule specifications.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Email => "email",
            RuleKind::MinLength => "min_length",
            RuleKind::MaxLength => "max_length",
            RuleKind::Password => "password",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleKind {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| TagError::UnknownRule(s.to_owned()))
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// A problem found in a rule specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    /// A rule name with no matching rule.
    #[error("unknown validation rule: {0}")]
    UnknownRule(String),

    /// Options a rule could not parse.
    #[error("invalid {rule} options: {options}")]
    InvalidOptions {
        /// The rule whose options failed.
        rule: RuleKind,
        /// The options as written.
        options: String,
    },
}

impl TagError {
    /// Machine-readable code for the error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            TagError::UnknownRule(_) => "unknown_rule",
            TagError::InvalidOptions { .. } => "invalid_options",
        }
    }
}

impl From<TagError> for ValidationError {
    fn from(error: TagError) -> Self {
        let code = error.code();
        let mut validation_error = ValidationError::new(code, error.to_string());
        match error {
            TagError::UnknownRule(name) => {
                validation_error = validation_error.with_param("rule", name);
            }
            TagError::InvalidOptions { rule, options } => {
                validation_error = validation_error
                    .with_param("rule", rule.name())
                    .with_param("options", options);
            }
        }
        validation_error
    }
}

// ============================================================================
// RULE INVOCATION
// ============================================================================

/// One `(name, options)` pair parsed from a specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleInvocation<'a> {
    /// Rule name as written (trimmed).
    pub name: &'a str,
    /// Everything after the first `=`, or empty.
    pub options: &'a str,
}

impl<'a> RuleInvocation<'a> {
    /// Creates an invocation.
    #[must_use]
    pub const fn new(name: &'a str, options: &'a str) -> Self {
        Self { name, options }
    }

    /// The rule this invocation names, if it exists.
    #[must_use]
    pub fn kind(&self) -> Option<RuleKind> {
        self.name.parse().ok()
    }

    /// Parses the options as a length bound.
    pub fn length_bound(&self, rule: RuleKind) -> Result<usize, TagError> {
        self.options.parse().map_err(|_| TagError::InvalidOptions {
            rule,
            options: self.options.to_owned(),
        })
    }

    /// Checks the invocation the way [`RuleSpec::parse_strict`] does.
    fn verify(&self) -> Result<(), TagError> {
        let kind: RuleKind = self.name.parse()?;
        match kind {
            RuleKind::MinLength | RuleKind::MaxLength => self.length_bound(kind).map(|_| ()),
            RuleKind::Password => PasswordPolicy::resolve(self.options, None)
                .map(|_| ())
                .map_err(|_| TagError::InvalidOptions {
                    rule: kind,
                    options: self.options.to_owned(),
                }),
            RuleKind::Required | RuleKind::Email => Ok(()),
        }
    }
}

// ============================================================================
// RULE SPEC
// ============================================================================

/// An ordered list of rule invocations.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::tag::{RuleInvocation, RuleSpec};
///
/// let spec = RuleSpec::parse("required,min_length=3,password=min_length=6,require_digits=false");
/// let invocations: Vec<_> = spec.iter().copied().collect();
/// assert_eq!(
///     invocations,
///     vec![
///         RuleInvocation::new("required", ""),
///         RuleInvocation::new("min_length", "3"),
///         RuleInvocation::new("password", "min_length=6,require_digits=false"),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSpec<'a> {
    invocations: Vec<RuleInvocation<'a>>,
}

impl<'a> RuleSpec<'a> {
    /// Parses a specification. Never fails.
    #[must_use]
    pub fn parse(spec: &'a str) -> Self {
        let mut invocations = Vec::new();
        let mut rest = spec;

        while !rest.is_empty() {
            let (entry, tail) = rest.split_once(',').unwrap_or((rest, ""));

            match entry.split_once('=') {
                Some((raw_name, _)) if raw_name.trim() == RuleKind::Password.name() => {
                    // `entry` is a prefix of `rest`; the options run from just
                    // past its first `=` through the last absorbed token.
                    let start = raw_name.len() + 1;
                    let mut end = entry.len();
                    let mut remaining = tail;
                    while !remaining.is_empty() {
                        let (next, after) = remaining.split_once(',').unwrap_or((remaining, ""));
                        if !PasswordPolicy::is_option(next) {
                            break;
                        }
                        end += 1 + next.len();
                        remaining = after;
                    }

                    let options = rest[start..end].trim_matches(|c: char| c == ',' || c.is_whitespace());
                    invocations.push(RuleInvocation::new(raw_name.trim(), options));
                    rest = remaining;
                    continue;
                }
                Some((raw_name, options)) => {
                    let name = raw_name.trim();
                    if !name.is_empty() {
                        invocations.push(RuleInvocation::new(name, options.trim()));
                    }
                }
                None => {
                    let name = entry.trim();
                    if !name.is_empty() {
                        invocations.push(RuleInvocation::new(name, ""));
                    }
                }
            }

            rest = tail;
        }

        Self { invocations }
    }

    /// Parses a specification, rejecting unknown rules and options that
    /// would fail at validation time.
    pub fn parse_strict(spec: &'a str) -> Result<Self, TagError> {
        let parsed = Self::parse(spec);
        for invocation in &parsed.invocations {
            invocation.verify()?;
        }
        Ok(parsed)
    }

    /// Iterates over the invocations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, RuleInvocation<'a>> {
        self.invocations.iter()
    }

    /// Number of invocations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    /// Returns true if the specification has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }
}

impl<'s, 'a> IntoIterator for &'s RuleSpec<'a> {
    type Item = &'s RuleInvocation<'a>;
    type IntoIter = std::slice::Iter<'s, RuleInvocation<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.invocations.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
