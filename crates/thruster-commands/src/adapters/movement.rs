//! Movable view of an entity.

use std::cell::RefCell;
use std::f64::consts::TAU;

use thruster_core::constants::{DIRECTION_NUMBER, POSITION, VELOCITY, VELOCITY_DIRECTION};
use thruster_core::errors::{CommandError, CommandResult};
use thruster_core::property::PropertyStore;
use thruster_core::types::{EntityId, Vector};

use crate::capabilities::{Identified, Movable};

pub struct MoveAdapter<'a, S> {
    subject: &'a RefCell<S>,
}

impl<'a, S: PropertyStore> MoveAdapter<'a, S> {
    pub fn new(subject: &'a RefCell<S>) -> Self {
        Self { subject }
    }
}

impl<S: PropertyStore> Identified for MoveAdapter<'_, S> {
    fn entity_id(&self) -> EntityId {
        self.subject.borrow().entity_id()
    }
}

impl<S: PropertyStore> Movable for MoveAdapter<'_, S> {
    fn get_position(&self) -> CommandResult<Vector> {
        Ok(self.subject.borrow().get_vector(POSITION)?)
    }

    fn set_position(&mut self, position: Vector) -> CommandResult {
        Ok(self
            .subject
            .borrow_mut()
            .set_property(POSITION, position.into())?)
    }

    /// Projects `velocity` onto the motion heading:
    /// `angle = velocity_direction * TAU / direction_number`,
    /// result `(cos(angle) * vx, sin(angle) * vy)`.
    fn get_velocity_vector(&self) -> CommandResult<Vector> {
        let subject = self.subject.borrow();
        let heading = subject.get_integer(VELOCITY_DIRECTION)?;
        let direction_number = subject.get_integer(DIRECTION_NUMBER)?;
        let velocity = subject.get_vector(VELOCITY)?;

        if direction_number <= 0 {
            return Err(CommandError::InvalidCapabilityUse {
                entity: subject.entity_id(),
                capability: "Movable",
                reason: format!("direction_number must be positive, got {direction_number}"),
            });
        }

        let angle = heading as f64 * TAU / direction_number as f64;
        Ok(Vector::new(angle.cos() * velocity.x, angle.sin() * velocity.y))
    }
}
