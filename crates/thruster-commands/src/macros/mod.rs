//! Macro commands: ordered sequences executed as one logical operation.
//!
//! Execution is fail-fast with no rollback. When a step fails the macro
//! stops, reports `MacroFailed` with the failing step's error as its
//! source, and leaves the effects of earlier steps in place. Wrap a macro
//! in [`AtomicMacroCommand`] to put the entity back on failure.

pub mod atomic;
pub mod move_with_fuel;
pub mod rotate_with_velocity_direction;

pub use atomic::AtomicMacroCommand;
pub use move_with_fuel::MoveWithFuel;
pub use rotate_with_velocity_direction::RotateWithVelocityDirection;

use tracing::{debug, warn};

use thruster_core::errors::CommandResult;

use crate::commands::Command;

/// Runs its commands strictly in the order they were added.
pub struct SimpleMacroCommand<'a> {
    name: &'static str,
    commands: Vec<Box<dyn Command + 'a>>,
}

impl<'a> SimpleMacroCommand<'a> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            commands: Vec::new(),
        }
    }

    /// Builder-style append.
    pub fn with(mut self, command: impl Command + 'a) -> Self {
        self.push(command);
        self
    }

    pub fn push(&mut self, command: impl Command + 'a) {
        self.commands.push(Box::new(command));
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Command for SimpleMacroCommand<'_> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn execute(&mut self) -> CommandResult {
        let name = self.name;
        for (step, command) in self.commands.iter_mut().enumerate() {
            if let Err(err) = command.execute() {
                warn!(
                    command = name,
                    step,
                    failed = command.name(),
                    code = err.kind().code(),
                    error = %err,
                    "macro command stopped"
                );
                return Err(err.in_macro(name, step, command.name()));
            }
            debug!(command = name, step, done = command.name(), "macro step complete");
        }
        Ok(())
    }
}
