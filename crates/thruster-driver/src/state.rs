//! Driver snapshot: the complete visible state after each tick.

use serde::{Deserialize, Serialize};

use thruster_core::entity::Entity;
use thruster_core::types::SimTime;

use crate::orders::Order;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverSnapshot {
    pub time: SimTime,
    /// All entities, ordered by id.
    pub entities: Vec<Entity>,
    /// Orders that failed during this tick.
    pub failures: Vec<OrderFailure>,
}

/// A failed order and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderFailure {
    pub order: Order,
    /// Stable error code, e.g. `ERR_NOT_ENOUGH_FUEL`.
    pub code: String,
    /// Code of the innermost error when a macro command failed.
    pub cause: String,
    pub message: String,
}

impl DriverSnapshot {
    pub fn entity(&self, id: u32) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id.0 == id)
    }
}
