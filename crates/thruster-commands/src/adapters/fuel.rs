//! Fuel view of an entity, serving both the check and the burn.

use std::cell::RefCell;

use thruster_core::constants::{FUEL_CONSUMPTION, FUEL_FOR_NEXT_MOVE, FUEL_IN_TANK, VELOCITY};
use thruster_core::errors::CommandResult;
use thruster_core::property::PropertyStore;
use thruster_core::types::EntityId;

use crate::capabilities::{FuelBurnable, FuelCheckable, Identified};

pub struct FuelAdapter<'a, S> {
    subject: &'a RefCell<S>,
}

impl<'a, S: PropertyStore> FuelAdapter<'a, S> {
    pub fn new(subject: &'a RefCell<S>) -> Self {
        Self { subject }
    }

    fn fuel_in_tank(&self) -> CommandResult<f64> {
        Ok(self.subject.borrow().get_number(FUEL_IN_TANK)?)
    }
}

impl<S: PropertyStore> Identified for FuelAdapter<'_, S> {
    fn entity_id(&self) -> EntityId {
        self.subject.borrow().entity_id()
    }
}

impl<S: PropertyStore> FuelCheckable for FuelAdapter<'_, S> {
    /// Euclidean length of the raw (un-rotated) velocity.
    fn get_velocity_magnitude(&self) -> CommandResult<f64> {
        Ok(self.subject.borrow().get_vector(VELOCITY)?.length())
    }

    fn get_fuel_consumption(&self) -> CommandResult<f64> {
        Ok(self.subject.borrow().get_number(FUEL_CONSUMPTION)?)
    }

    fn get_fuel_in_tank(&self) -> CommandResult<f64> {
        self.fuel_in_tank()
    }

    fn set_fuel_for_next_move(&mut self, fuel: f64) -> CommandResult {
        Ok(self
            .subject
            .borrow_mut()
            .set_property(FUEL_FOR_NEXT_MOVE, fuel.into())?)
    }
}

impl<S: PropertyStore> FuelBurnable for FuelAdapter<'_, S> {
    fn get_fuel_in_tank(&self) -> CommandResult<f64> {
        self.fuel_in_tank()
    }

    fn get_fuel_for_next_move(&self) -> CommandResult<f64> {
        Ok(self.subject.borrow().get_number(FUEL_FOR_NEXT_MOVE)?)
    }

    fn set_fuel_in_tank(&mut self, fuel: f64) -> CommandResult {
        Ok(self
            .subject
            .borrow_mut()
            .set_property(FUEL_IN_TANK, fuel.into())?)
    }
}
