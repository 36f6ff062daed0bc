//! Snapshot/restore wrapper for all-or-nothing execution.

use std::cell::RefCell;

use tracing::warn;

use thruster_core::errors::CommandResult;
use thruster_core::property::{PropertyStore, Restorable};

use crate::commands::Command;

/// Runs `inner` and, if it fails, restores every property of the entity to
/// the values it had before execution. The inner error is returned unchanged.
pub struct AtomicMacroCommand<'a, S> {
    subject: &'a RefCell<S>,
    inner: Box<dyn Command + 'a>,
}

impl<'a, S: PropertyStore + Restorable> AtomicMacroCommand<'a, S> {
    pub fn new(subject: &'a RefCell<S>, inner: impl Command + 'a) -> Self {
        Self {
            subject,
            inner: Box::new(inner),
        }
    }
}

impl<S: PropertyStore + Restorable> Command for AtomicMacroCommand<'_, S> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn execute(&mut self) -> CommandResult {
        let snapshot = self.subject.borrow().snapshot();
        let result = self.inner.execute();
        if let Err(err) = &result {
            let mut subject = self.subject.borrow_mut();
            subject.restore(snapshot);
            warn!(
                entity = %subject.entity_id(),
                command = self.inner.name(),
                error = %err,
                "rolled back entity after failed command"
            );
        }
        result
    }
}
