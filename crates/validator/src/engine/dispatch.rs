//! Rule dispatch
//!
//! Maps one parsed [`RuleInvocation`] to its typed rule and runs it.

use crate::config::UnknownRules;
use crate::foundation::{FieldValue, Rule, ValidationError};
use crate::tag::{RuleInvocation, RuleKind, TagError};
use crate::validators::{PasswordPolicy, email, max_length, min_length, password, required};

/// Everything a dispatch needs besides the invocation and the value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Dispatcher<'v> {
    pub(crate) custom_password: Option<&'v PasswordPolicy>,
    pub(crate) unknown_rules: UnknownRules,
}

impl Dispatcher<'_> {
    /// Runs one invocation. At most one error per invocation; option errors
    /// replace the check they belong to.
    pub(crate) fn run(
        &self,
        invocation: &RuleInvocation<'_>,
        value: &FieldValue<'_>,
    ) -> Result<(), ValidationError> {
        let Some(kind) = invocation.kind() else {
            return match self.unknown_rules {
                UnknownRules::Ignore => {
                    tracing::debug!(rule = invocation.name, "ignoring unknown validation rule");
                    Ok(())
                }
                UnknownRules::Reject => Err(TagError::UnknownRule(invocation.name.to_owned()).into()),
            };
        };

        tracing::trace!(rule = %kind, kind = %value.kind(), "dispatching rule");

        match kind {
            RuleKind::Required => required().check(value),
            RuleKind::Email => email().check(value),
            RuleKind::MinLength => min_length(invocation.length_bound(kind)?).check(value),
            RuleKind::MaxLength => max_length(invocation.length_bound(kind)?).check(value),
            RuleKind::Password => {
                let policy = PasswordPolicy::resolve(invocation.options, self.custom_password)
                    .map_err(|error| {
                        tracing::debug!(
                            %error,
                            options = invocation.options,
                            fallback = ?error.fallback(),
                            "password options rejected, check skipped"
                        );
                        TagError::InvalidOptions {
                            rule: kind,
                            options: invocation.options.to_owned(),
                        }
                    })?;
                password(policy).check(value)
            }
        }
    }
}
