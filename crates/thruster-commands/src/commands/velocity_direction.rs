use tracing::debug;

use thruster_core::errors::{CommandError, CommandResult};

use super::Command;
use crate::capabilities::VelocityDirectionChangeable;

/// Resynchronises the motion heading with the current facing after a turn.
pub struct ChangeVelocityDirection<V> {
    target: V,
}

impl<V: VelocityDirectionChangeable> ChangeVelocityDirection<V> {
    pub fn new(target: V) -> Self {
        Self { target }
    }

    pub fn into_inner(self) -> V {
        self.target
    }
}

impl<V: VelocityDirectionChangeable> Command for ChangeVelocityDirection<V> {
    fn name(&self) -> &'static str {
        "ChangeVelocityDirection"
    }

    fn execute(&mut self) -> CommandResult {
        if !self.target.is_movable()? {
            return Err(CommandError::InvalidCapabilityUse {
                entity: self.target.entity_id(),
                capability: "VelocityDirectionChangeable",
                reason: "attempted to set motion heading on an immovable entity".to_string(),
            });
        }

        let direction = self.target.get_direction()?;
        self.target.set_velocity_direction(direction)?;
        debug!(entity = %self.target.entity_id(), direction, "velocity direction synced");
        Ok(())
    }
}
