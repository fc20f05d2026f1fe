//! Record traversal
//!
//! One level of traversal checks every field of a record. With
//! [`FanOut::Parallel`] each field runs on its own scoped thread; a field
//! holding a nested record recurses inside that thread and fans out again.
//! Every level joins all of its threads before returning.
//!
//! Each field task collects into its own [`ValidationErrors`]; the level
//! merges them in field declaration order after the join, so no lock is
//! held while rules run and the final order is deterministic.

use std::thread;

use crate::config::FanOut;
use crate::engine::dispatch::Dispatcher;
use crate::foundation::{FieldDescriptor, FieldValue, Record, ValidationErrors};
use crate::tag::RuleSpec;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Traversal<'v> {
    pub(crate) dispatcher: Dispatcher<'v>,
    pub(crate) fan_out: FanOut,
}

impl Traversal<'_> {
    /// Validates every field of `record`, recursing into nested records.
    pub(crate) fn record(&self, record: &dyn Record) -> ValidationErrors {
        let fields = record.fields();
        tracing::trace!(record = record.type_name(), fields = fields.len(), "visiting record");

        let mut errors = ValidationErrors::new();
        if self.fan_out == FanOut::Sequential || fields.len() < 2 {
            for field in &fields {
                errors.merge(self.field(field));
            }
            return errors;
        }

        thread::scope(|scope| {
            let handles: Vec<_> = fields
                .iter()
                .map(|field| scope.spawn(move || self.field(field)))
                .collect();

            for handle in handles {
                match handle.join() {
                    Ok(local) => errors.merge(local),
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            }
        });

        errors
    }

    /// Runs one field's rules, then descends into it if it is a record.
    fn field(&self, field: &FieldDescriptor<'_>) -> ValidationErrors {
        if let Some(serialized) = &field.serialized_name {
            tracing::trace!(field = %field.name, serialized_name = %serialized, "field serialization hint");
        }

        let mut errors = ValidationErrors::new();
        for invocation in &RuleSpec::parse(&field.rules) {
            if let Err(error) = self.dispatcher.run(invocation, &field.value) {
                errors.add(error.with_field(field.name.clone()));
            }
        }

        if let FieldValue::Record(nested) = &field.value {
            errors.merge(self.record(*nested).under(&field.name));
        }

        errors
    }
}
