use tracing::debug;

use thruster_core::errors::CommandResult;

use super::Command;
use crate::capabilities::Movable;

/// `position += velocity_vector`.
pub struct Move<M> {
    movable: M,
}

impl<M: Movable> Move<M> {
    pub fn new(movable: M) -> Self {
        Self { movable }
    }

    pub fn into_inner(self) -> M {
        self.movable
    }
}

impl<M: Movable> Command for Move<M> {
    fn name(&self) -> &'static str {
        "Move"
    }

    fn execute(&mut self) -> CommandResult {
        let position = self.movable.get_position()?;
        let velocity = self.movable.get_velocity_vector()?;
        let new_position = position + velocity;

        self.movable.set_position(new_position)?;
        debug!(entity = %self.movable.entity_id(), ?position, ?new_position, "moved");
        Ok(())
    }
}
