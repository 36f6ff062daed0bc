use tracing::debug;

use thruster_core::errors::{CommandError, CommandResult};

use super::Command;
use crate::capabilities::Rotatable;

/// `direction = (direction + angular_velocity) mod direction_number`.
///
/// Uses floor modulo, so a negative sum wraps to a valid heading index.
pub struct Rotate<R> {
    rotatable: R,
}

impl<R: Rotatable> Rotate<R> {
    pub fn new(rotatable: R) -> Self {
        Self { rotatable }
    }

    pub fn into_inner(self) -> R {
        self.rotatable
    }
}

impl<R: Rotatable> Command for Rotate<R> {
    fn name(&self) -> &'static str {
        "Rotate"
    }

    fn execute(&mut self) -> CommandResult {
        let direction = self.rotatable.get_direction()?;
        let angular_velocity = self.rotatable.get_angular_velocity()?;
        let direction_number = self.rotatable.get_direction_number()?;

        if direction_number <= 0 {
            return Err(CommandError::InvalidCapabilityUse {
                entity: self.rotatable.entity_id(),
                capability: "Rotatable",
                reason: format!("direction_number must be positive, got {direction_number}"),
            });
        }

        // i128 so extreme headings cannot overflow the sum.
        let final_direction = (direction as i128 + angular_velocity as i128)
            .rem_euclid(direction_number as i128) as i64;

        self.rotatable.set_direction(final_direction)?;
        debug!(
            entity = %self.rotatable.entity_id(),
            from = direction,
            to = final_direction,
            "rotated"
        );
        Ok(())
    }
}
