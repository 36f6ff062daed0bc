//! Motion-heading view of an entity.

use std::cell::RefCell;

use thruster_core::constants::{DIRECTION, POSITION, VELOCITY, VELOCITY_DIRECTION};
use thruster_core::errors::CommandResult;
use thruster_core::property::PropertyStore;
use thruster_core::types::EntityId;

use crate::capabilities::{Identified, VelocityDirectionChangeable};

pub struct VelocityDirectionAdapter<'a, S> {
    subject: &'a RefCell<S>,
}

impl<'a, S: PropertyStore> VelocityDirectionAdapter<'a, S> {
    pub fn new(subject: &'a RefCell<S>) -> Self {
        Self { subject }
    }
}

impl<S: PropertyStore> Identified for VelocityDirectionAdapter<'_, S> {
    fn entity_id(&self) -> EntityId {
        self.subject.borrow().entity_id()
    }
}

impl<S: PropertyStore> VelocityDirectionChangeable for VelocityDirectionAdapter<'_, S> {
    /// An entity is movable when it carries both a position and a velocity.
    fn is_movable(&self) -> CommandResult<bool> {
        let subject = self.subject.borrow();
        Ok(subject.has_property(POSITION) && subject.has_property(VELOCITY))
    }

    fn get_direction(&self) -> CommandResult<i64> {
        Ok(self.subject.borrow().get_integer(DIRECTION)?)
    }

    fn set_velocity_direction(&mut self, direction: i64) -> CommandResult {
        Ok(self
            .subject
            .borrow_mut()
            .set_property(VELOCITY_DIRECTION, direction.into())?)
    }
}
