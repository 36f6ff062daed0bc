use std::cell::RefCell;

use thruster_core::errors::CommandResult;
use thruster_core::property::PropertyStore;

use super::SimpleMacroCommand;
use crate::adapters::{RotatableAdapter, VelocityDirectionAdapter};
use crate::commands::{ChangeVelocityDirection, Command, Rotate};

/// `[Rotate, ChangeVelocityDirection]`: turn, then point the motion heading
/// along the new facing so the next move uses it.
pub struct RotateWithVelocityDirection<'a> {
    inner: SimpleMacroCommand<'a>,
}

impl<'a> RotateWithVelocityDirection<'a> {
    pub const NAME: &'static str = "RotateWithVelocityDirection";

    pub fn new(rotate: impl Command + 'a, change_velocity_direction: impl Command + 'a) -> Self {
        Self {
            inner: SimpleMacroCommand::new(Self::NAME)
                .with(rotate)
                .with(change_velocity_direction),
        }
    }

    pub fn for_subject<S: PropertyStore + 'a>(subject: &'a RefCell<S>) -> Self {
        Self::new(
            Rotate::new(RotatableAdapter::new(subject)),
            ChangeVelocityDirection::new(VelocityDirectionAdapter::new(subject)),
        )
    }
}

impl Command for RotateWithVelocityDirection<'_> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn execute(&mut self) -> CommandResult {
        self.inner.execute()
    }
}
