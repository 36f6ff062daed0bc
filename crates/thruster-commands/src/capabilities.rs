//! Narrow capability contracts, one per command.
//!
//! Every accessor may fail; store errors surface through these methods
//! without being reinterpreted.

use thruster_core::errors::CommandResult;
use thruster_core::types::{EntityId, Vector};

/// Identifies the entity behind a capability, for error context and logs.
pub trait Identified {
    fn entity_id(&self) -> EntityId;
}

/// Position and world-space velocity access, used by `Move`.
pub trait Movable: Identified {
    fn get_position(&self) -> CommandResult<Vector>;

    fn set_position(&mut self, position: Vector) -> CommandResult;

    /// Velocity already projected onto the current motion heading.
    fn get_velocity_vector(&self) -> CommandResult<Vector>;
}

/// Discrete heading access, used by `Rotate`.
pub trait Rotatable: Identified {
    fn get_direction(&self) -> CommandResult<i64>;

    fn set_direction(&mut self, direction: i64) -> CommandResult;

    fn get_angular_velocity(&self) -> CommandResult<i64>;

    fn get_direction_number(&self) -> CommandResult<i64>;
}

/// Motion-heading resynchronisation, used by `ChangeVelocityDirection`.
pub trait VelocityDirectionChangeable: Identified {
    fn is_movable(&self) -> CommandResult<bool>;

    fn get_direction(&self) -> CommandResult<i64>;

    fn set_velocity_direction(&mut self, direction: i64) -> CommandResult;
}

/// Fuel sufficiency check and reservation, used by `CheckFuel`.
pub trait FuelCheckable: Identified {
    fn get_velocity_magnitude(&self) -> CommandResult<f64>;

    fn get_fuel_consumption(&self) -> CommandResult<f64>;

    fn get_fuel_in_tank(&self) -> CommandResult<f64>;

    fn set_fuel_for_next_move(&mut self, fuel: f64) -> CommandResult;
}

/// Debit of the reserved fuel, used by `BurnFuel`.
pub trait FuelBurnable: Identified {
    fn get_fuel_in_tank(&self) -> CommandResult<f64>;

    fn get_fuel_for_next_move(&self) -> CommandResult<f64>;

    fn set_fuel_in_tank(&mut self, fuel: f64) -> CommandResult;
}
