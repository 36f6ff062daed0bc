//! Rotatable view of an entity: straight pass-through of heading properties.

use std::cell::RefCell;

use thruster_core::constants::{ANGULAR_VELOCITY, DIRECTION, DIRECTION_NUMBER};
use thruster_core::errors::CommandResult;
use thruster_core::property::PropertyStore;
use thruster_core::types::EntityId;

use crate::capabilities::{Identified, Rotatable};

pub struct RotatableAdapter<'a, S> {
    subject: &'a RefCell<S>,
}

impl<'a, S: PropertyStore> RotatableAdapter<'a, S> {
    pub fn new(subject: &'a RefCell<S>) -> Self {
        Self { subject }
    }
}

impl<S: PropertyStore> Identified for RotatableAdapter<'_, S> {
    fn entity_id(&self) -> EntityId {
        self.subject.borrow().entity_id()
    }
}

impl<S: PropertyStore> Rotatable for RotatableAdapter<'_, S> {
    fn get_direction(&self) -> CommandResult<i64> {
        Ok(self.subject.borrow().get_integer(DIRECTION)?)
    }

    fn set_direction(&mut self, direction: i64) -> CommandResult {
        Ok(self
            .subject
            .borrow_mut()
            .set_property(DIRECTION, direction.into())?)
    }

    fn get_angular_velocity(&self) -> CommandResult<i64> {
        Ok(self.subject.borrow().get_integer(ANGULAR_VELOCITY)?)
    }

    fn get_direction_number(&self) -> CommandResult<i64> {
        Ok(self.subject.borrow().get_integer(DIRECTION_NUMBER)?)
    }
}
