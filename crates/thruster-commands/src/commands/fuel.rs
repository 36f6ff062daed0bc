//! Fuel reservation and debit.
//!
//! `CheckFuel` reserves, `BurnFuel` debits. Neither enforces the pairing;
//! `MoveWithFuel` does, by ordering.

use tracing::debug;

use thruster_core::errors::{CommandError, CommandResult};

use super::Command;
use crate::capabilities::{FuelBurnable, FuelCheckable};

/// Reserves `velocity_magnitude / fuel_consumption` in `fuel_for_next_move`.
///
/// Fails with `NotEnoughFuelForMove` and writes nothing when the tank
/// cannot cover the reservation. Never touches `fuel_in_tank`.
pub struct CheckFuel<F> {
    tank: F,
}

impl<F: FuelCheckable> CheckFuel<F> {
    pub fn new(tank: F) -> Self {
        Self { tank }
    }

    pub fn into_inner(self) -> F {
        self.tank
    }
}

impl<F: FuelCheckable> Command for CheckFuel<F> {
    fn name(&self) -> &'static str {
        "CheckFuel"
    }

    fn execute(&mut self) -> CommandResult {
        let velocity_magnitude = self.tank.get_velocity_magnitude()?;
        let fuel_consumption = self.tank.get_fuel_consumption()?;

        if fuel_consumption.is_nan() || fuel_consumption <= 0.0 {
            return Err(CommandError::InvalidCapabilityUse {
                entity: self.tank.entity_id(),
                capability: "FuelCheckable",
                reason: format!("fuel_consumption must be positive, got {fuel_consumption}"),
            });
        }

        let fuel_needed = velocity_magnitude / fuel_consumption;
        let fuel_in_tank = self.tank.get_fuel_in_tank()?;

        if !fuel_needed.is_finite() || !fuel_in_tank.is_finite() {
            return Err(CommandError::InvalidCapabilityUse {
                entity: self.tank.entity_id(),
                capability: "FuelCheckable",
                reason: format!(
                    "fuel values must be finite, got fuel_in_tank {fuel_in_tank}, fuel_needed {fuel_needed}"
                ),
            });
        }

        if fuel_in_tank - fuel_needed < 0.0 {
            return Err(CommandError::NotEnoughFuelForMove {
                entity: self.tank.entity_id(),
                fuel_in_tank,
                fuel_needed,
            });
        }

        self.tank.set_fuel_for_next_move(fuel_needed)?;
        debug!(entity = %self.tank.entity_id(), fuel_needed, fuel_in_tank, "fuel reserved");
        Ok(())
    }
}

/// `fuel_in_tank -= fuel_for_next_move`, unconditionally.
pub struct BurnFuel<F> {
    tank: F,
}

impl<F: FuelBurnable> BurnFuel<F> {
    pub fn new(tank: F) -> Self {
        Self { tank }
    }

    pub fn into_inner(self) -> F {
        self.tank
    }
}

impl<F: FuelBurnable> Command for BurnFuel<F> {
    fn name(&self) -> &'static str {
        "BurnFuel"
    }

    fn execute(&mut self) -> CommandResult {
        let fuel_in_tank = self.tank.get_fuel_in_tank()?;
        let reserved = self.tank.get_fuel_for_next_move()?;
        let remaining = fuel_in_tank - reserved;

        self.tank.set_fuel_in_tank(remaining)?;
        debug!(entity = %self.tank.entity_id(), burned = reserved, remaining, "fuel burned");
        Ok(())
    }
}
