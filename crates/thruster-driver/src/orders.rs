//! Orders: serialisable requests to run one command against one entity.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use thruster_commands::adapters::{
    FuelAdapter, MoveAdapter, RotatableAdapter, VelocityDirectionAdapter,
};
use thruster_commands::commands::{
    BurnFuel, ChangeVelocityDirection, CheckFuel, Command, Move, Rotate,
};
use thruster_commands::macros::{MoveWithFuel, RotateWithVelocityDirection};
use thruster_core::property::{PropertyStore, Restorable};
use thruster_core::types::EntityId;

/// All orders a scenario script or caller can issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Order {
    Move { entity: EntityId },
    Rotate { entity: EntityId },
    ChangeVelocityDirection { entity: EntityId },
    CheckFuel { entity: EntityId },
    BurnFuel { entity: EntityId },
    /// Check fuel, move, burn fuel.
    MoveWithFuel { entity: EntityId },
    /// Rotate, then resync the motion heading.
    RotateWithVelocityDirection { entity: EntityId },
}

impl Order {
    pub fn entity(&self) -> EntityId {
        match self {
            Order::Move { entity }
            | Order::Rotate { entity }
            | Order::ChangeVelocityDirection { entity }
            | Order::CheckFuel { entity }
            | Order::BurnFuel { entity }
            | Order::MoveWithFuel { entity }
            | Order::RotateWithVelocityDirection { entity } => *entity,
        }
    }

    /// Build the command for this order over `subject`.
    pub fn build<'a, S>(
        &self,
        subject: &'a RefCell<S>,
        atomic_fuel_moves: bool,
    ) -> Box<dyn Command + 'a>
    where
        S: PropertyStore + Restorable + 'a,
    {
        match self {
            Order::Move { .. } => Box::new(Move::new(MoveAdapter::new(subject))),
            Order::Rotate { .. } => Box::new(Rotate::new(RotatableAdapter::new(subject))),
            Order::ChangeVelocityDirection { .. } => Box::new(ChangeVelocityDirection::new(
                VelocityDirectionAdapter::new(subject),
            )),
            Order::CheckFuel { .. } => Box::new(CheckFuel::new(FuelAdapter::new(subject))),
            Order::BurnFuel { .. } => Box::new(BurnFuel::new(FuelAdapter::new(subject))),
            Order::MoveWithFuel { .. } if atomic_fuel_moves => {
                Box::new(MoveWithFuel::atomic(subject))
            }
            Order::MoveWithFuel { .. } => Box::new(MoveWithFuel::for_subject(subject)),
            Order::RotateWithVelocityDirection { .. } => {
                Box::new(RotateWithVelocityDirection::for_subject(subject))
            }
        }
    }
}
